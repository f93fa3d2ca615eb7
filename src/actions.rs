//! Lifecycle actions and the fixed command tables behind them.

use crate::config::{Orchestration, RepoPath};

/// One of the six lifecycle operations lenv knows about.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleAction {
    Init,
    Start,
    Stop,
    Down,
    Update,
    Restart,
}

impl LifecycleAction {
    /// Menu order.
    pub const ALL: [LifecycleAction; 6] = [
        LifecycleAction::Init,
        LifecycleAction::Start,
        LifecycleAction::Stop,
        LifecycleAction::Down,
        LifecycleAction::Update,
        LifecycleAction::Restart,
    ];

    pub fn verb(&self) -> &'static str {
        match self {
            LifecycleAction::Init => "init",
            LifecycleAction::Start => "start",
            LifecycleAction::Stop => "stop",
            LifecycleAction::Down => "down",
            LifecycleAction::Update => "update",
            LifecycleAction::Restart => "restart",
        }
    }

    pub fn label(&self) -> String {
        sentence_case(self.verb())
    }
}

/// Uppercase the first character and lowercase the rest ("init" -> "Init").
pub fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl RepoPath {
    /// Directory a repository lives in; expanded by the host shell, not here.
    pub fn cd_target(&self, repo: &str) -> String {
        match self {
            RepoPath::Workspace => format!("~/workspace/{repo}"),
            RepoPath::Gopath => format!("$GOPATH/src/bitbucket.org/ffxblue/{repo}"),
        }
    }
}

impl Orchestration {
    /// Argument words for `action`, or None when lifecycle actions are disabled.
    pub fn command_words(&self, action: LifecycleAction) -> Option<&'static [&'static str]> {
        use LifecycleAction::*;
        let words: &'static [&'static str] = match (self, action) {
            (Orchestration::None, _) => return None,
            (Orchestration::Make, Init) => &["make", "init"],
            (Orchestration::Make, Start) => &["make", "start"],
            (Orchestration::Make, Stop) => &["make", "stop"],
            (Orchestration::Make, Down) => &["make", "down"],
            (Orchestration::Make, Update) => &["make", "update"],
            (Orchestration::Make, Restart) => &["make", "restart"],
            (Orchestration::Docker, Init) => &["docker-compose", "pull"],
            (Orchestration::Docker, Start) => &["docker-compose", "up", "--detach", "--no-build"],
            (Orchestration::Docker, Stop) => &["docker-compose", "down"],
            (Orchestration::Docker, Down) => &["docker-compose", "down", "-v"],
            (Orchestration::Docker, Update) => &["docker-compose", "pull"],
            (Orchestration::Docker, Restart) => &["docker-compose", "restart"],
        };
        Some(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_case_basics() {
        assert_eq!(sentence_case("init"), "Init");
        assert_eq!(sentence_case("RESTART"), "Restart");
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn sentence_case_is_idempotent() {
        for a in LifecycleAction::ALL {
            let once = a.label();
            assert_eq!(sentence_case(&once), once);
        }
    }

    #[test]
    fn labels_in_menu_order() {
        let labels: Vec<String> = LifecycleAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec!["Init", "Start", "Stop", "Down", "Update", "Restart"]
        );
    }

    #[test]
    fn none_has_no_commands() {
        for a in LifecycleAction::ALL {
            assert!(Orchestration::None.command_words(a).is_none());
        }
    }

    #[test]
    fn docker_table() {
        let start = Orchestration::Docker
            .command_words(LifecycleAction::Start)
            .unwrap();
        assert_eq!(start, ["docker-compose", "up", "--detach", "--no-build"]);
        let down = Orchestration::Docker
            .command_words(LifecycleAction::Down)
            .unwrap();
        assert_eq!(down, ["docker-compose", "down", "-v"]);
    }

    #[test]
    fn make_uses_verb_as_target() {
        for a in LifecycleAction::ALL {
            assert_eq!(
                Orchestration::Make.command_words(a).unwrap(),
                ["make", a.verb()]
            );
        }
    }

    #[test]
    fn cd_targets() {
        assert_eq!(RepoPath::Workspace.cd_target("api"), "~/workspace/api");
        assert_eq!(
            RepoPath::Gopath.cd_target("api"),
            "$GOPATH/src/bitbucket.org/ffxblue/api"
        );
    }
}
