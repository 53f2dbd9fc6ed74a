#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub prefix: String,         // Selects the entry (e.g. "g")
    pub name: String,           // Display name in the menu
    pub template: String,       // Shell template, may contain %s
    pub workspace: Option<u32>, // Workspace to switch to afterwards
    pub browser: bool,          // Encode spaces as '+' and wrap in the browser launcher
}

impl CommandEntry {
    pub fn new(prefix: &str, name: &str, template: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            name: name.to_string(),
            template: template.to_string(),
            workspace: None,
            browser: false,
        }
    }

    pub fn browser(mut self) -> Self {
        self.browser = true;
        self
    }

    /// Workspace `0` means "no switch".
    pub fn on_workspace(mut self, workspace: u32) -> Self {
        self.workspace = (workspace != 0).then_some(workspace);
        self
    }

    pub fn menu_line(&self) -> String {
        format!("{} --> {}", self.prefix, self.name)
    }
}
