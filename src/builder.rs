//! Config -> menu tree.
//!
//! Layout:
//! - `lenv` header (kept out of the dropdown), separator
//! - `Groups`: one submenu per group, each with the six actions dispatched as
//!   `<tool> <verb> --group <name>`
//! - `Repos`: one submenu per repo with two label rows, then (unless the repo is
//!   orchestrated via `none`) a separator and the six actions as
//!   `cd <dir> && <words...>`

use crate::actions::LifecycleAction;
use crate::config::{GroupEntry, LenvConfig, RepoEntry};
use crate::menu::{MenuEntry, MenuItem, ShellCommand};

pub const HEADER_TEXT: &str = "lenv";
pub const GROUPS_TEXT: &str = "Groups";
pub const REPOS_TEXT: &str = "Repos";

pub fn build_menu(config: &LenvConfig, tool: &str) -> Vec<MenuEntry> {
    for (group, member) in config.unknown_group_members() {
        tracing::warn!(group, member, "group member is not a configured repo");
    }

    let groups: Vec<MenuEntry> = config
        .groups
        .iter()
        .map(|g| MenuEntry::from(group_menu(g, tool)))
        .collect();
    let repos: Vec<MenuEntry> = config
        .repos
        .iter()
        .map(|r| MenuEntry::from(repo_menu(r)))
        .collect();

    tracing::debug!(
        groups = groups.len(),
        repos = repos.len(),
        tool,
        "built menu"
    );

    vec![
        MenuItem::new(HEADER_TEXT).with_dropdown(false).into(),
        MenuEntry::Separator,
        MenuItem::new(GROUPS_TEXT).with_submenu(groups).into(),
        MenuItem::new(REPOS_TEXT).with_submenu(repos).into(),
    ]
}

pub fn group_menu(group: &GroupEntry, tool: &str) -> MenuItem {
    let actions = LifecycleAction::ALL
        .iter()
        .map(|a| {
            let cmd = ShellCommand::new(tool).args([a.verb(), "--group", group.name.as_str()]);
            MenuEntry::from(MenuItem::terminal_action(a.label(), cmd))
        })
        .collect();
    MenuItem::new(group.name.clone()).with_submenu(actions)
}

pub fn repo_menu(repo: &RepoEntry) -> MenuItem {
    let mut rows: Vec<MenuEntry> = vec![
        MenuItem::disabled(format!("Path Type: {}", repo.path_kind)).into(),
        MenuItem::disabled(format!("Orchestrated Via: {}", repo.orchestration)).into(),
    ];

    let dir = repo.path_kind.cd_target(&repo.name);
    let mut actions = LifecycleAction::ALL
        .iter()
        .filter_map(|a| {
            let words = repo.orchestration.command_words(*a)?;
            let cmd = ShellCommand::new("cd")
                .arg(dir.as_str())
                .arg("&&")
                .args(words.iter().copied());
            Some(MenuEntry::from(MenuItem::terminal_action(a.label(), cmd)))
        })
        .peekable();

    if actions.peek().is_some() {
        rows.push(MenuEntry::Separator);
        rows.extend(actions);
    }

    MenuItem::new(repo.name.clone()).with_submenu(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Orchestration, RepoPath};

    fn repo(path_kind: RepoPath, orchestration: Orchestration) -> RepoEntry {
        RepoEntry {
            name: "api".to_string(),
            path_kind,
            orchestration,
        }
    }

    fn command_lines(item: &MenuItem) -> Vec<(String, String)> {
        item.items()
            .filter_map(|i| {
                i.command
                    .as_ref()
                    .map(|c| (i.text.clone(), c.command_line()))
            })
            .collect()
    }

    #[test]
    fn every_orchestrated_combination_matches_table() {
        for path_kind in [RepoPath::Workspace, RepoPath::Gopath] {
            for orch in [Orchestration::Make, Orchestration::Docker] {
                let m = repo_menu(&repo(path_kind, orch));
                let lines = command_lines(&m);
                assert_eq!(lines.len(), 6);
                for (a, (label, line)) in LifecycleAction::ALL.iter().zip(lines) {
                    let words = orch.command_words(*a).unwrap().join(" ");
                    assert_eq!(label, a.label());
                    assert_eq!(
                        line,
                        format!("cd {} && {}", path_kind.cd_target("api"), words)
                    );
                }
            }
        }
    }

    #[test]
    fn none_has_only_label_rows() {
        for path_kind in [RepoPath::Workspace, RepoPath::Gopath] {
            let m = repo_menu(&repo(path_kind, Orchestration::None));
            assert_eq!(m.submenu.len(), 2);
            assert!(m.items().all(|i| i.disabled && i.command.is_none()));
        }
    }

    #[test]
    fn separator_precedes_actions() {
        let m = repo_menu(&repo(RepoPath::Workspace, Orchestration::Make));
        assert_eq!(m.submenu.len(), 9);
        assert!(m.submenu[2].is_separator());
        assert_eq!(m.submenu[0].as_item().unwrap().text, "Path Type: workspace");
        assert_eq!(
            m.submenu[1].as_item().unwrap().text,
            "Orchestrated Via: make"
        );
    }

    #[test]
    fn group_always_has_six_terminal_actions() {
        let g = GroupEntry {
            name: "backend".to_string(),
            repos: vec![],
        };
        let m = group_menu(&g, "lenv");
        assert_eq!(m.submenu.len(), 6);
        assert!(m.items().all(|i| i.terminal));
        assert_eq!(
            m.find("Restart").unwrap().command.as_ref().unwrap().command_line(),
            "lenv restart --group backend"
        );
    }

    #[test]
    fn top_level_layout() {
        let menu = build_menu(&LenvConfig::default(), "lenv");
        assert_eq!(menu.len(), 4);
        let header = menu[0].as_item().unwrap();
        assert_eq!(header.text, HEADER_TEXT);
        assert_eq!(header.dropdown, Some(false));
        assert!(menu[1].is_separator());
        assert_eq!(menu[2].as_item().unwrap().text, GROUPS_TEXT);
        assert_eq!(menu[3].as_item().unwrap().text, REPOS_TEXT);
    }
}
