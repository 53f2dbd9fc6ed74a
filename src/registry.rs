use std::collections::{BTreeSet, HashMap};
use log::{debug, warn};
use crate::config::DuplicatePolicy;
use crate::model::CommandEntry;

/// Read-only prefix lookup over the command list. Built once per run.
pub struct Registry {
    commands: HashMap<String, CommandEntry>,
}

impl Registry {
    pub fn build(entries: Vec<CommandEntry>, policy: DuplicatePolicy) -> Self {
        let mut commands = HashMap::with_capacity(entries.len());
        for entry in entries {
            if commands.contains_key(&entry.prefix) {
                warn!("Registry: duplicate prefix '{}' ({:?})", entry.prefix, policy);
                if policy == DuplicatePolicy::FirstWins {
                    continue;
                }
            }
            commands.insert(entry.prefix.clone(), entry);
        }
        debug!("Registry: {} commands", commands.len());
        Self { commands }
    }

    pub fn lookup(&self, prefix: &str) -> Option<&CommandEntry> {
        self.commands.get(prefix)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// One `"<prefix> --> <name>"` line per entry, sorted and deduplicated.
    pub fn render_menu(&self) -> String {
        let lines: BTreeSet<String> = self.commands.values().map(CommandEntry::menu_line).collect();
        lines.into_iter().collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<CommandEntry> {
        vec![
            CommandEntry::new("w", "window", "rofi -show window"),
            CommandEntry::new("a", "Applications", "rofi -show drun"),
            CommandEntry::new("g", "Google", "https://www.google.com/search?q=%s").browser(),
        ]
    }

    #[test]
    fn lookup_by_prefix() {
        let registry = Registry::build(entries(), DuplicatePolicy::LastWins);
        for prefix in ["w", "a", "g"] {
            assert_eq!(registry.lookup(prefix).map(|e| e.prefix.as_str()), Some(prefix));
        }
        assert!(registry.lookup("z").is_none());
    }

    #[test]
    fn later_duplicate_overwrites_earlier() {
        let mut list = entries();
        list.push(CommandEntry::new("a", "Apps (run)", "rofi -show run"));
        let registry = Registry::build(list, DuplicatePolicy::LastWins);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.lookup("a").map(|e| e.name.as_str()), Some("Apps (run)"));
    }

    #[test]
    fn first_wins_keeps_earlier_duplicate() {
        let mut list = entries();
        list.push(CommandEntry::new("a", "Apps (run)", "rofi -show run"));
        let registry = Registry::build(list, DuplicatePolicy::FirstWins);
        assert_eq!(registry.lookup("a").map(|e| e.name.as_str()), Some("Applications"));
    }

    #[test]
    fn menu_is_sorted() {
        let registry = Registry::build(entries(), DuplicatePolicy::LastWins);
        assert_eq!(
            registry.render_menu(),
            "a --> Applications\ng --> Google\nw --> window"
        );
    }

    #[test]
    fn empty_registry_renders_empty_menu() {
        let registry = Registry::build(Vec::new(), DuplicatePolicy::LastWins);
        assert_eq!(registry.render_menu(), "");
    }
}
