//! `lenv-xbar doctor`: explain what the menu would be built from.
//!
//! Never fails the process; every problem is reported as a line on stderr.

use std::env;
use std::path::{Path, PathBuf};

use crate::color::{color_enabled_stderr, fail_mark, ok_mark, warn_mark};
use crate::config::{config_path, LenvConfig, RepoPath};
use crate::locator::locate_tool_root;

/// Expand the leading `~` and `$GOPATH` the way the host shell would.
/// `$GOPATH` falls back to `~/go` (the Go toolchain default).
pub fn expand_repo_dir(path_kind: RepoPath, repo: &str) -> Option<PathBuf> {
    let home = home::home_dir()?;
    let gopath = env::var("GOPATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| s.split(':').next().map(PathBuf::from))
        .unwrap_or_else(|| home.join("go"));
    expand_with(path_kind, repo, &home, &gopath)
}

fn expand_with(path_kind: RepoPath, repo: &str, home: &Path, gopath: &Path) -> Option<PathBuf> {
    let target = path_kind.cd_target(repo);
    if let Some(rest) = target.strip_prefix("~/") {
        return Some(home.join(rest));
    }
    if let Some(rest) = target.strip_prefix("$GOPATH/") {
        return Some(gopath.join(rest));
    }
    None
}

pub fn run_doctor(command: &str, config_override: Option<&Path>) {
    let use_color = color_enabled_stderr();
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("lenv-xbar doctor");
    eprintln!("  version: v{version}");
    eprintln!("  host: {} / {}", env::consts::OS, env::consts::ARCH);

    let cfg_path = match config_override {
        Some(p) => {
            eprintln!("  {}: config override {}", ok_mark(use_color), p.display());
            p.to_path_buf()
        }
        None => match locate_tool_root(command) {
            Ok(install) => {
                eprintln!(
                    "  {}: {} -> {}",
                    ok_mark(use_color),
                    install.link.display(),
                    install.target.display()
                );
                eprintln!("  install root: {}", install.root.display());
                config_path(&install.root)
            }
            Err(e) => {
                eprintln!("  {}: {e}", fail_mark(use_color));
                eprintln!("doctor: completed diagnostics.");
                return;
            }
        },
    };

    let cfg = match LenvConfig::load(&cfg_path) {
        Ok(c) => {
            eprintln!(
                "  {}: {} ({} repos, {} groups)",
                ok_mark(use_color),
                cfg_path.display(),
                c.repos.len(),
                c.groups.len()
            );
            c
        }
        Err(e) => {
            eprintln!("  {}: {e}", fail_mark(use_color));
            eprintln!("doctor: completed diagnostics.");
            return;
        }
    };

    for r in &cfg.repos {
        let dir = expand_repo_dir(r.path_kind, &r.name);
        let mark = match &dir {
            Some(d) if d.is_dir() => ok_mark(use_color),
            _ => warn_mark(use_color),
        };
        eprintln!(
            "  {mark}: repo {} [{} / {}] {}",
            r.name,
            r.path_kind,
            r.orchestration,
            dir.map(|d| d.display().to_string())
                .unwrap_or_else(|| "(home directory unknown)".to_string())
        );
    }
    for (group, member) in cfg.unknown_group_members() {
        eprintln!(
            "  {}: group {group} lists unknown repo {member}",
            warn_mark(use_color)
        );
    }
    eprintln!("doctor: completed diagnostics.");
}
