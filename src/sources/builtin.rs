use crate::model::CommandEntry;
use crate::sources::Source;
use log::info;

/// The fixed command list compiled into the launcher.
pub struct BuiltinSource;

impl Source for BuiltinSource {
    fn entries(&self) -> Vec<CommandEntry> {
        let entries = vec![
            CommandEntry::new("a", "Applications", "rofi -show drun"),
            CommandEntry::new("g", "Google", "https://www.google.com/search?q=%s")
                .browser()
                .on_workspace(2),
            CommandEntry::new("=", "Calculator", "rofi -show calc"),
            CommandEntry::new("gpt", "Chatgpt.com", "https://chat.openai.com/?q=%s")
                .browser()
                .on_workspace(2),
            CommandEntry::new("claude", "Claude ai", "https://claude.ai/new/?q=%s")
                .browser()
                .on_workspace(2),
            CommandEntry::new("ai", "Perplexity.ai", "https://www.perplexity.ai/search?q=%s")
                .browser()
                .on_workspace(2),
            CommandEntry::new("w", "window", "rofi -show window"),
        ];
        info!("BuiltinSource: {} entries", entries.len());
        entries
    }
}
