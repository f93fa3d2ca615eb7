use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lenv_xbar::errors::display_for_anyhow;
use lenv_xbar::{build_plugin_menu, render, PluginOptions};

mod cli;

use cli::{Cli, Cmd, OutputFormat};

fn run_menu(cli: &Cli) -> anyhow::Result<()> {
    let opts = PluginOptions {
        command: cli.command.clone(),
        config: cli.config.clone(),
    };
    let menu = build_plugin_menu(&opts)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Xbar => render(&menu, &mut out)
            .map_err(lenv_xbar::PluginError::from)
            .context("writing menu")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &menu).context("writing menu as JSON")?;
            writeln!(out).context("writing menu as JSON")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    lenv_xbar::telemetry::telemetry_init(cli.verbose);

    if let Some(Cmd::Doctor { color }) = &cli.cmd {
        if let Some(mode) = color {
            lenv_xbar::color::set_color_mode(*mode);
        }
        lenv_xbar::doctor::run_doctor(&cli.command, cli.config.as_deref());
        return ExitCode::from(0);
    }

    match run_menu(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "menu run failed");
            let (msg, code) = display_for_anyhow(&e);
            // The host shows stdout as the menu only on exit 0; the diagnostic replaces it.
            println!("{msg}");
            if cli.strict_exit {
                ExitCode::from(code)
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
