use clap::ValueEnum;

#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub shell: String,
    pub picker: String,
    pub prompt: String,
    pub browser: String,
    pub switcher: String,
    pub query_mode: QueryMode,
    pub duplicates: DuplicatePolicy,
    pub switch_timing: SwitchTiming,
}

/// How a missing query is obtained for a template that needs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QueryMode {
    /// Run the prompt before materializing and substitute its answer.
    #[default]
    Prompt,
    /// Substitute `$(<prompt>)` so the target shell asks for the query itself.
    Subshell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DuplicatePolicy {
    #[default]
    LastWins,
    FirstWins,
}

/// When the workspace switch runs relative to printing the command output.
/// Either way it only runs after the command succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SwitchTiming {
    AfterOutput,
    #[default]
    BeforeOutput,
}

fn default_shell() -> String { "bash".to_string() }
fn default_picker() -> String {
    r#"rofi -sep "\n" -dmenu -p 'Prefix:' -i -mesg 'Select a command'"#.to_string()
}
fn default_prompt() -> String { "rofi -dmenu -p 'Enter Search Query:'".to_string() }
fn default_browser() -> String { "zen-browser".to_string() }
fn default_switcher() -> String { "hyprctl dispatch workspace".to_string() }

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            picker: default_picker(),
            prompt: default_prompt(),
            browser: default_browser(),
            switcher: default_switcher(),
            query_mode: QueryMode::default(),
            duplicates: DuplicatePolicy::default(),
            switch_timing: SwitchTiming::default(),
        }
    }
}

/// Optional overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub shell: Option<String>,
    pub picker: Option<String>,
    pub prompt: Option<String>,
    pub browser: Option<String>,
    pub switcher: Option<String>,
    pub query_mode: Option<QueryMode>,
    pub duplicates: Option<DuplicatePolicy>,
    pub switch_timing: Option<SwitchTiming>,
}

pub fn load_config(overrides: Overrides) -> LauncherConfig {
    let defaults = LauncherConfig::default();
    LauncherConfig {
        shell: overrides.shell.unwrap_or(defaults.shell),
        picker: overrides.picker.unwrap_or(defaults.picker),
        prompt: overrides.prompt.unwrap_or(defaults.prompt),
        browser: overrides.browser.unwrap_or(defaults.browser),
        switcher: overrides.switcher.unwrap_or(defaults.switcher),
        query_mode: overrides.query_mode.unwrap_or(defaults.query_mode),
        duplicates: overrides.duplicates.unwrap_or(defaults.duplicates),
        switch_timing: overrides.switch_timing.unwrap_or(defaults.switch_timing),
    }
}
