use std::io::Write;
use std::process::{Command, Stdio};
use log::debug;
use crate::error::ProcessError;

/// A single external program call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            stdin: None,
        }
    }

    /// `<shell> -c <line>`
    pub fn shell(shell: &str, line: &str) -> Self {
        Self::new(shell, &["-c", line])
    }

    pub fn with_stdin(mut self, input: String) -> Self {
        self.stdin = Some(input);
        self
    }

    /// The shell line when this is a `-c` invocation, the program otherwise.
    pub fn describe(&self) -> &str {
        match self.args.as_slice() {
            [flag, line] if flag == "-c" => line.as_str(),
            _ => self.program.as_str(),
        }
    }
}

/// Runs an invocation to completion and returns its captured stdout.
pub trait Runner {
    fn run(&mut self, invocation: &Invocation) -> Result<String, ProcessError>;
}

/// Spawns real processes with the inherited environment.
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<String, ProcessError> {
        debug!("Runner: {} ({})", invocation.describe(), invocation.program);

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(if invocation.stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|source| ProcessError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

        let io_err = |source: std::io::Error| ProcessError::Io {
            program: invocation.program.clone(),
            source,
        };

        if let (Some(input), Some(mut stdin)) = (&invocation.stdin, child.stdin.take()) {
            stdin.write_all(input.as_bytes()).map_err(io_err)?;
            // stdin drops here so the child sees EOF
        }

        let output = child.wait_with_output().map_err(io_err)?;
        if !output.status.success() {
            return Err(ProcessError::Status {
                program: invocation.program.clone(),
                code: output.status.code(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::collections::VecDeque;

    /// Records invocations and answers them from a queue of canned results.
    #[derive(Default)]
    pub struct FakeRunner {
        pub calls: Vec<Invocation>,
        responses: VecDeque<Result<String, ProcessError>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn ok(mut self, stdout: &str) -> Self {
            self.responses.push_back(Ok(stdout.to_string()));
            self
        }

        pub fn fail(mut self, program: &str, code: i32) -> Self {
            self.responses.push_back(Err(ProcessError::Status {
                program: program.to_string(),
                code: Some(code),
            }));
            self
        }
    }

    impl Runner for FakeRunner {
        fn run(&mut self, invocation: &Invocation) -> Result<String, ProcessError> {
            self.calls.push(invocation.clone());
            self.responses.pop_front().unwrap_or_else(|| Ok(String::new()))
        }
    }
}
