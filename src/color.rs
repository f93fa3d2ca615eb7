#![allow(clippy::module_name_repetitions)]
//! Color mode for human-facing stderr output (`doctor`).
//!
//! Menu output on stdout is never colored; the host would show the escape codes verbatim.
//! Precedence: `NO_COLOR`, then `--color`, then `LENV_XBAR_COLOR`, then TTY detection.

use clap::ValueEnum;
use once_cell::sync::OnceCell;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

static COLOR_MODE: OnceCell<ColorMode> = OnceCell::new();

pub fn set_color_mode(mode: ColorMode) {
    let _ = COLOR_MODE.set(mode);
}

fn parse_color_mode(s: &str) -> Option<ColorMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" | "on" | "true" | "yes" => Some(ColorMode::Always),
        "never" | "off" | "false" | "no" => Some(ColorMode::Never),
        _ => None,
    }
}

fn resolve(mode: Option<ColorMode>, env_pref: Option<&str>, no_color: bool, is_tty: bool) -> bool {
    if no_color {
        return false;
    }
    let mode = mode
        .or_else(|| env_pref.and_then(parse_color_mode))
        .unwrap_or(ColorMode::Auto);
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty,
    }
}

pub fn color_enabled_stderr() -> bool {
    let env_pref = std::env::var("LENV_XBAR_COLOR").ok();
    resolve(
        COLOR_MODE.get().copied(),
        env_pref.as_deref(),
        std::env::var_os("NO_COLOR").is_some(),
        atty::is(atty::Stream::Stderr),
    )
}

/// Wrap string with ANSI color code when enabled; otherwise return unchanged.
pub fn paint(enabled: bool, code: &str, s: &str) -> String {
    if enabled {
        format!("{code}{s}\x1b[0m")
    } else {
        s.to_string()
    }
}

pub fn ok_mark(use_color: bool) -> String {
    paint(use_color, "\x1b[32m", "ok")
}

pub fn warn_mark(use_color: bool) -> String {
    paint(use_color, "\x1b[33m", "warn")
}

pub fn fail_mark(use_color: bool) -> String {
    paint(use_color, "\x1b[31;1m", "fail")
}
