use log::debug;
use crate::error::LauncherError;
use crate::model::CommandEntry;
use crate::registry::Registry;

pub const MENU_SEPARATOR: &str = " --> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub entry: &'a CommandEntry,
    /// `None` when the input had no query segment at all,
    /// `Some("")` when it had one that was empty.
    pub query: Option<String>,
}

/// Resolves whatever the picker returned: a menu line when it contains the
/// separator, otherwise free text typed into the picker. Surrounding
/// whitespace is dropped, so `"g  "` carries no query segment.
pub fn resolve<'a>(registry: &'a Registry, raw: &str) -> Result<Selection<'a>, LauncherError> {
    let raw = raw.trim();
    if raw.contains(MENU_SEPARATOR) {
        resolve_selection(registry, raw)
    } else {
        resolve_typed(registry, raw)
    }
}

/// `"<prefix> --> <name>"`. Never carries a query.
pub fn resolve_selection<'a>(
    registry: &'a Registry,
    raw: &str,
) -> Result<Selection<'a>, LauncherError> {
    let (prefix, _) = raw.split_once(MENU_SEPARATOR).unwrap_or((raw, ""));
    let entry = find(registry, prefix.trim())?;
    Ok(Selection { entry, query: None })
}

/// `"<prefix> [query text]"`, split on the first space.
pub fn resolve_typed<'a>(
    registry: &'a Registry,
    raw: &str,
) -> Result<Selection<'a>, LauncherError> {
    let (prefix, query) = match raw.split_once(' ') {
        Some((prefix, query)) => (prefix, Some(query.to_string())),
        None => (raw, None),
    };
    let entry = find(registry, prefix)?;
    Ok(Selection { entry, query })
}

fn find<'a>(registry: &'a Registry, prefix: &str) -> Result<&'a CommandEntry, LauncherError> {
    debug!("Resolver: prefix='{}'", prefix);
    registry.lookup(prefix).ok_or_else(|| LauncherError::UnknownPrefix {
        prefix: prefix.to_string(),
    })
}
