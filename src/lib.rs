//! lenv-xbar: render lenv repos and groups as an xbar/BitBar menu.
//!
//! Pipeline, one pass per host refresh:
//! locate `lenv` on PATH -> load `<root>/config.yaml` -> build the menu tree -> print it.
//! Any failure ends the run without printing a partial menu.

pub mod actions;
pub mod builder;
pub mod color;
pub mod config;
pub mod doctor;
pub mod errors;
pub mod locator;
pub mod menu;
pub mod render;
pub mod telemetry;
pub mod util;

use std::path::PathBuf;

pub use actions::{sentence_case, LifecycleAction};
pub use builder::build_menu;
pub use color::ColorMode;
pub use config::{ConfigError, GroupEntry, LenvConfig, Orchestration, RepoEntry, RepoPath};
pub use errors::PluginError;
pub use locator::{locate_tool_root, LocateError, ToolInstall, LENV_COMMAND};
pub use menu::{MenuEntry, MenuItem, ShellCommand};
pub use render::{render, render_to_string};

/// Where the menu's inputs come from.
#[derive(Clone, Debug)]
pub struct PluginOptions {
    /// External tool name searched on PATH.
    pub command: String,
    /// Read this config instead of `<install root>/config.yaml`; skips discovery.
    pub config: Option<PathBuf>,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            command: LENV_COMMAND.to_string(),
            config: None,
        }
    }
}

/// Run discovery and config loading, returning the finished menu tree.
///
/// Group actions invoke the discovered executable by path; with a config override
/// the command name is used as-is and resolved by the host's PATH.
pub fn build_plugin_menu(opts: &PluginOptions) -> Result<Vec<MenuEntry>, PluginError> {
    let (cfg_path, tool) = match &opts.config {
        Some(p) => (p.clone(), opts.command.clone()),
        None => {
            let install = locate_tool_root(&opts.command)?;
            (
                config::config_path(&install.root),
                install.link.display().to_string(),
            )
        }
    };
    tracing::debug!(config = %cfg_path.display(), "loading config");
    let cfg = LenvConfig::load(&cfg_path)?;
    Ok(build_menu(&cfg, &tool))
}
