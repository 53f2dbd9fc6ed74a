use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("i/o error talking to {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {}", status_text(.code))]
    Status { program: String, code: Option<i32> },
}

fn status_text(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "a signal".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("menu picker failed")]
    PickerFailed(#[source] ProcessError),
    #[error("no matching command for prefix: {prefix}")]
    UnknownPrefix { prefix: String },
    #[error("query prompt failed")]
    PromptFailed(#[source] ProcessError),
    #[error("command '{name}' failed")]
    CommandFailed {
        name: String,
        #[source]
        source: ProcessError,
    },
    #[error("switching to workspace {workspace} failed")]
    WorkspaceSwitchFailed {
        workspace: u32,
        #[source]
        source: ProcessError,
    },
}
