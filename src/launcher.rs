use log::{debug, info};
use crate::config::{LauncherConfig, SwitchTiming};
use crate::error::LauncherError;
use crate::executor;
use crate::model::CommandEntry;
use crate::process::{Invocation, Runner};
use crate::prompt;
use crate::registry::Registry;
use crate::resolver;
use crate::template;

/// Where the raw selection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Show the menu in the picker and resolve whatever it returns.
    Picker,
    /// Text given up front, always resolved as `"<prefix> [query]"`.
    Typed(String),
}

/// A resolved command ready to hand to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub entry: CommandEntry,
    pub command: String,
}

pub struct Launcher<R: Runner> {
    pub config: LauncherConfig,
    pub registry: Registry,
    pub runner: R,
}

impl<R: Runner> Launcher<R> {
    pub fn new(config: LauncherConfig, entries: Vec<CommandEntry>, runner: R) -> Self {
        let registry = Registry::build(entries, config.duplicates);
        info!("Launcher: {} commands registered", registry.len());
        Self { config, registry, runner }
    }

    pub fn menu(&self) -> String {
        self.registry.render_menu()
    }

    /// Shows the menu in the picker and returns the selected line.
    pub fn pick(&mut self) -> Result<String, LauncherError> {
        let invocation = Invocation::shell(&self.config.shell, &self.config.picker)
            .with_stdin(self.menu());
        let selection = self
            .runner
            .run(&invocation)
            .map_err(LauncherError::PickerFailed)?;
        debug!("Picker returned '{}'", selection.trim_end());
        Ok(selection)
    }

    /// Resolves the input, acquires the query and materializes the command.
    pub fn prepare(&mut self, input: Input) -> Result<Plan, LauncherError> {
        let selection = match input {
            Input::Picker => {
                let raw = self.pick()?;
                resolver::resolve(&self.registry, &raw)?
            }
            Input::Typed(text) => resolver::resolve_typed(&self.registry, &text)?,
        };
        let entry = selection.entry.clone();

        let needs_query = template::needs_query(&entry.template);
        let query =
            prompt::acquire(&mut self.runner, &self.config, selection.query, needs_query)?;
        let command = template::command_line(&entry, &query, &self.config.browser);
        debug!("Materialized '{}' to: {}", entry.prefix, command);

        Ok(Plan { entry, command })
    }

    /// Runs one selection end to end. `emit` receives the command output.
    pub fn run(&mut self, input: Input, mut emit: impl FnMut(&str)) -> Result<(), LauncherError> {
        let plan = self.prepare(input)?;
        let output = executor::execute(
            &mut self.runner,
            &self.config.shell,
            &plan.entry,
            &plan.command,
        )?;

        match self.config.switch_timing {
            SwitchTiming::AfterOutput => {
                emit(&output);
                executor::switch_workspace(&mut self.runner, &self.config.switcher, &plan.entry)
            }
            SwitchTiming::BeforeOutput => {
                executor::switch_workspace(&mut self.runner, &self.config.switcher, &plan.entry)?;
                emit(&output);
                Ok(())
            }
        }
    }
}
