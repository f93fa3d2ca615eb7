//! Log setup. stdout belongs to the menu, so everything goes to stderr.
//!
//! Filter: `LENV_XBAR_LOG` (EnvFilter syntax), else `debug` with `--verbose`, else `warn`.

use std::env;

use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

pub const LOG_ENV: &str = "LENV_XBAR_LOG";

fn filter_directive(env_value: Option<String>, verbose: bool) -> String {
    match env_value.map(|s| s.trim().to_string()) {
        Some(s) if !s.is_empty() => s,
        _ if verbose => "debug".to_string(),
        _ => "warn".to_string(),
    }
}

pub fn telemetry_init(verbose: bool) {
    if INIT.get().is_some() {
        return;
    }
    let directive = filter_directive(env::var(LOG_ENV).ok(), verbose);
    let env_filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("lenv-xbar: log init skipped (global subscriber already set)");
        return;
    }
    let _ = INIT.set(());
}
