mod config;
mod error;
mod executor;
mod launcher;
mod model;
mod process;
mod prompt;
mod registry;
mod resolver;
mod sources;
mod template;

use anyhow::Result;
use clap::Parser;
use log::info;
use crate::config::{DuplicatePolicy, Overrides, QueryMode, SwitchTiming, load_config};
use crate::error::LauncherError;
use crate::launcher::{Input, Launcher};
use crate::process::SystemRunner;
use crate::sources::{Source, builtin::BuiltinSource};

#[derive(Parser, Debug)]
#[command(author, version, about = "Prefix-driven command launcher", long_about = None)]
struct Args {
    /// "<prefix> [query]" to run directly, skipping the menu picker
    input: Vec<String>,

    /// Print the menu and exit
    #[arg(long)]
    list: bool,

    /// Print the final command instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Shell used to run the picker, prompt and commands
    #[arg(long)]
    shell: Option<String>,

    /// Menu picker command, reads the menu on stdin
    #[arg(long)]
    picker: Option<String>,

    /// Query prompt command
    #[arg(long)]
    prompt: Option<String>,

    /// Browser launcher for browser-bound commands
    #[arg(long)]
    browser: Option<String>,

    /// Workspace switcher, the workspace number is appended
    #[arg(long)]
    switcher: Option<String>,

    #[arg(long, value_enum)]
    query_mode: Option<QueryMode>,

    #[arg(long, value_enum)]
    duplicates: Option<DuplicatePolicy>,

    #[arg(long, value_enum)]
    switch_timing: Option<SwitchTiming>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(Overrides {
        shell: args.shell,
        picker: args.picker,
        prompt: args.prompt,
        browser: args.browser,
        switcher: args.switcher,
        query_mode: args.query_mode,
        duplicates: args.duplicates,
        switch_timing: args.switch_timing,
    });
    let mut launcher = Launcher::new(config, BuiltinSource.entries(), SystemRunner);

    if args.list {
        println!("{}", launcher.menu());
        return Ok(());
    }

    let input = if args.input.is_empty() {
        Input::Picker
    } else {
        Input::Typed(args.input.join(" "))
    };

    let result = if args.dry_run {
        launcher.prepare(input).map(|plan| println!("{}", plan.command))
    } else {
        launcher.run(input, |output| {
            if !output.is_empty() {
                println!("{}", output.trim_end());
            }
        })
    };

    match result {
        Err(LauncherError::UnknownPrefix { prefix }) => {
            eprintln!("No matching command for prefix: {}", prefix);
            Ok(())
        }
        Err(e) => {
            info!("Run failed: {:?}", e);
            Err(e.into())
        }
        Ok(()) => Ok(()),
    }
}
