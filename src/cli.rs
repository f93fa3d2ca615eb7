use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// xbar/BitBar plugin text
    Xbar,
    /// Menu tree as pretty JSON (debugging)
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Cmd {
    /// Check tool discovery, config and repo directories
    Doctor {
        /// Colorize output: auto|always|never
        #[arg(long = "color", value_enum)]
        color: Option<lenv_xbar::ColorMode>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "lenv-xbar",
    version,
    about = "xbar/BitBar plugin exposing lenv lifecycle actions for repos and groups."
)]
pub(crate) struct Cli {
    /// Read this config file instead of <lenv install root>/config.yaml
    #[arg(long, env = "LENV_XBAR_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Name of the lenv executable on PATH
    #[arg(long, env = "LENV_XBAR_COMMAND", default_value = lenv_xbar::LENV_COMMAND)]
    pub(crate) command: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Xbar)]
    pub(crate) format: OutputFormat,

    /// Exit non-zero on failure (127 when lenv is missing, 1 otherwise) instead of 0
    #[arg(long)]
    pub(crate) strict_exit: bool,

    /// Log debug details to stderr
    #[arg(long)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) cmd: Option<Cmd>,
}
