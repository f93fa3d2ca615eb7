//! Error mapping guide:
//! - Discovery failures print the locator message verbatim; other failures are
//!   prefixed with `Plugin Error:`.
//! - Diagnostics go to stdout and the run still exits 0: the menu-bar host only shows
//!   stdout of a successful run.
//! - With `--strict-exit`, discovery failures exit 127 and everything else exits 1.
use crate::config::ConfigError;
use crate::locator::LocateError;

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot write menu: {0}")]
    Render(#[from] std::io::Error),
}

/// Map a plugin error to a process exit code.
pub fn exit_code_for_plugin_error(e: &PluginError) -> u8 {
    match e {
        PluginError::Locate(l) if l.is_not_found() => 127,
        _ => 1,
    }
}

/// Render the single diagnostic line shown in place of the menu.
pub fn display_for_plugin_error(e: &PluginError) -> String {
    match e {
        PluginError::Locate(l) if l.is_not_found() => l.to_string(),
        other => format!("Plugin Error: {other}"),
    }
}

/// Walk an anyhow chain for a plugin error; fall back to a generic message.
pub fn display_for_anyhow(e: &anyhow::Error) -> (String, u8) {
    match e.chain().find_map(|c| c.downcast_ref::<PluginError>()) {
        Some(pe) => (display_for_plugin_error(pe), exit_code_for_plugin_error(pe)),
        None => (format!("Plugin Error: {e:#}"), 1),
    }
}
