use log::{info, warn};
use crate::error::LauncherError;
use crate::model::CommandEntry;
use crate::process::{Invocation, Runner};

/// Runs the final command line through the shell and returns its stdout.
/// Output of a failed command is discarded.
pub fn execute<R: Runner>(
    runner: &mut R,
    shell: &str,
    entry: &CommandEntry,
    command: &str,
) -> Result<String, LauncherError> {
    info!("Executing '{}': {}", entry.name, command);
    runner
        .run(&Invocation::shell(shell, command))
        .map_err(|source| LauncherError::CommandFailed {
            name: entry.name.clone(),
            source,
        })
}

/// `<switcher...> <workspace>`. No-op for entries without a workspace.
pub fn switch_workspace<R: Runner>(
    runner: &mut R,
    switcher: &str,
    entry: &CommandEntry,
) -> Result<(), LauncherError> {
    let Some(workspace) = entry.workspace else {
        return Ok(());
    };

    let mut parts = switcher.split_whitespace();
    let Some(program) = parts.next() else {
        warn!("No workspace switcher configured, staying put");
        return Ok(());
    };
    let workspace_arg = workspace.to_string();
    let mut args: Vec<&str> = parts.collect();
    args.push(&workspace_arg);

    info!("Switching to workspace {}", workspace);
    runner
        .run(&Invocation::new(program, &args))
        .map(|_| ())
        .map_err(|source| LauncherError::WorkspaceSwitchFailed { workspace, source })
}
