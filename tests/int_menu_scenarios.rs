mod common;

use common::{command_line, top};
use lenv_xbar::{build_menu, ConfigError, LenvConfig};

fn menu_for(yaml: &str) -> Vec<lenv_xbar::MenuEntry> {
    let cfg = LenvConfig::from_yaml_str(yaml).expect("config decodes");
    build_menu(&cfg, "lenv")
}

#[test]
fn test_make_repo_has_labels_and_six_actions() {
    let menu = menu_for(
        "repos:\n  api:\n    repo_path: workspace\n    orchestrated_via: make\ngroups: {}\n",
    );
    let api = top(&menu, "Repos").find("api").expect("api submenu");
    assert_eq!(api.items().count(), 8);
    assert_eq!(api.items().filter(|i| i.disabled).count(), 2);
    assert_eq!(
        command_line(api.find("Start").unwrap()),
        "cd ~/workspace/api && make start"
    );
}

#[test]
fn test_docker_repo_down_removes_volumes() {
    let menu = menu_for(
        "repos:\n  api:\n    repo_path: workspace\n    orchestrated_via: docker\ngroups: {}\n",
    );
    let api = top(&menu, "Repos").find("api").unwrap();
    assert_eq!(
        command_line(api.find("Down").unwrap()),
        "cd ~/workspace/api && docker-compose down -v"
    );
    assert_eq!(
        command_line(api.find("Start").unwrap()),
        "cd ~/workspace/api && docker-compose up --detach --no-build"
    );
}

#[test]
fn test_unorchestrated_repo_has_two_rows_only() {
    let menu = menu_for(
        "repos:\n  api:\n    repo_path: gopath\n    orchestrated_via: none\ngroups: {}\n",
    );
    let api = top(&menu, "Repos").find("api").unwrap();
    assert_eq!(api.submenu.len(), 2);
    assert!(api.submenu.iter().all(|e| !e.is_separator()));
    assert!(api.items().all(|i| i.command.is_none() && !i.terminal));
}

#[test]
fn test_group_actions_dispatch_to_tool() {
    let menu = menu_for(
        "repos:\n  api:\n    repo_path: workspace\n    orchestrated_via: none\ngroups:\n  backend: [\"api\"]\n",
    );
    let backend = top(&menu, "Groups").find("backend").unwrap();
    assert_eq!(backend.submenu.len(), 6);
    assert_eq!(
        command_line(backend.find("Init").unwrap()),
        "lenv init --group backend"
    );
    assert!(backend.items().all(|i| i.terminal));
}

#[test]
fn test_unknown_repo_path_aborts_before_menu() {
    let err = LenvConfig::from_yaml_str(
        "repos:\n  api:\n    repo_path: \"unknown\"\n    orchestrated_via: make\n  web:\n    repo_path: workspace\n    orchestrated_via: make\n",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedRepoPath { .. }));
    assert_eq!(err.offending_repo(), Some("api"));
}

#[test]
fn test_repos_keep_config_order() {
    let menu = menu_for(
        "repos:\n  web:\n    repo_path: workspace\n    orchestrated_via: make\n  api:\n    repo_path: gopath\n    orchestrated_via: docker\n",
    );
    let names: Vec<&str> = top(&menu, "Repos").items().map(|i| i.text.as_str()).collect();
    assert_eq!(names, vec!["web", "api"]);
    let api = top(&menu, "Repos").find("api").unwrap();
    assert_eq!(
        command_line(api.find("Restart").unwrap()),
        "cd $GOPATH/src/bitbucket.org/ffxblue/api && docker-compose restart"
    );
}

#[test]
fn test_odd_repo_names_still_render() {
    let menu = menu_for(
        "repos:\n  \"a\\0b\":\n    repo_path: workspace\n    orchestrated_via: none\n  \"---\":\n    repo_path: workspace\n    orchestrated_via: none\n",
    );
    let out = lenv_xbar::render_to_string(&menu).expect("renders");
    assert!(out.lines().any(|l| l == "--a b"), "{out}");
    assert!(out.lines().any(|l| l == "--\u{2010}\u{2010}\u{2010}"), "{out}");
}
