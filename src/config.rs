//! lenv `config.yaml` decoding.
//!
//! The file lives in the lenv installation root and has two top-level keys:
//!
//! ```yaml
//! repos:
//!   api:
//!     repo_path: workspace      # workspace | gopath
//!     orchestrated_via: make    # docker | make | none
//! groups:
//!   backend: [api]
//! ```
//!
//! Both mappings keep file order. `repo_path` and `orchestrated_via` decode into closed
//! enums; any other value fails the whole load and names the first offending repository.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value as YamlValue};

/// Config file name inside the lenv installation root.
pub const LENV_CONFIG_FILE: &str = "config.yaml";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(LENV_CONFIG_FILE)
}

/// Filesystem convention used to find a repository's working directory.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoPath {
    Workspace,
    Gopath,
}

impl RepoPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoPath::Workspace => "workspace",
            RepoPath::Gopath => "gopath",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "workspace" => Some(RepoPath::Workspace),
            "gopath" => Some(RepoPath::Gopath),
            _ => None,
        }
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tooling family that realizes lifecycle actions for a repository.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orchestration {
    Docker,
    Make,
    None,
}

impl Orchestration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orchestration::Docker => "docker",
            Orchestration::Make => "make",
            Orchestration::None => "none",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "docker" => Some(Orchestration::Docker),
            "make" => Some(Orchestration::Make),
            "none" => Some(Orchestration::None),
            _ => None,
        }
    }
}

impl fmt::Display for Orchestration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize)]
pub struct RepoEntry {
    pub name: String,
    pub path_kind: RepoPath,
    pub orchestration: Orchestration,
}

#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize)]
pub struct GroupEntry {
    pub name: String,
    pub repos: Vec<String>,
}

/// Decoded configuration. Vectors keep the order of the YAML mappings.
#[derive(Clone, PartialEq, Eq, Debug, Default, serde::Serialize)]
pub struct LenvConfig {
    pub repos: Vec<RepoEntry>,
    pub groups: Vec<GroupEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Shape(String),
    #[error("repo_path \"{value}\" not supported for: {repo}")]
    UnsupportedRepoPath { repo: String, value: String },
    #[error("orchestrated_via \"{value}\" not supported for: {repo}")]
    UnsupportedOrchestration { repo: String, value: String },
}

impl ConfigError {
    /// Repository named by a schema violation, if this is one.
    pub fn offending_repo(&self) -> Option<&str> {
        match self {
            ConfigError::UnsupportedRepoPath { repo, .. }
            | ConfigError::UnsupportedOrchestration { repo, .. } => Some(repo),
            _ => None,
        }
    }
}

#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    repos: Option<Mapping>,
    #[serde(default)]
    groups: Option<Mapping>,
}

#[derive(Deserialize)]
struct RawRepo {
    repo_path: String,
    orchestrated_via: String,
}

fn key_string(k: &YamlValue, section: &str) -> Result<String, ConfigError> {
    match k {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        _ => Err(ConfigError::Shape(format!("{section} keys must be scalars"))),
    }
}

impl LenvConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str_at(&content, path)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_yaml_str_at(content, Path::new(LENV_CONFIG_FILE))
    }

    fn from_yaml_str_at(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty document decodes to null; treat it as an empty config.
        let raw: RawConfig = serde_yaml::from_str::<Option<RawConfig>>(content)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
            .unwrap_or_default();

        let mut repos = Vec::new();
        for (k, v) in raw.repos.unwrap_or_default() {
            let name = key_string(&k, "repos")?;
            let r: RawRepo = serde_yaml::from_value(v)
                .map_err(|e| ConfigError::Shape(format!("repos.{name}: {e}")))?;
            let path_kind =
                RepoPath::parse(&r.repo_path).ok_or_else(|| ConfigError::UnsupportedRepoPath {
                    repo: name.clone(),
                    value: r.repo_path.clone(),
                })?;
            let orchestration = Orchestration::parse(&r.orchestrated_via).ok_or_else(|| {
                ConfigError::UnsupportedOrchestration {
                    repo: name.clone(),
                    value: r.orchestrated_via.clone(),
                }
            })?;
            repos.push(RepoEntry {
                name,
                path_kind,
                orchestration,
            });
        }

        let mut groups = Vec::new();
        for (k, v) in raw.groups.unwrap_or_default() {
            let name = key_string(&k, "groups")?;
            let members: Option<Vec<String>> = serde_yaml::from_value(v)
                .map_err(|e| ConfigError::Shape(format!("groups.{name}: {e}")))?;
            groups.push(GroupEntry {
                name,
                repos: members.unwrap_or_default(),
            });
        }

        Ok(LenvConfig { repos, groups })
    }

    pub fn repo(&self, name: &str) -> Option<&RepoEntry> {
        self.repos.iter().find(|r| r.name == name)
    }

    /// `(group, member)` pairs whose member names no configured repository.
    pub fn unknown_group_members(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        for g in &self.groups {
            for m in &g.repos {
                if self.repo(m).is_none() {
                    out.push((g.name.as_str(), m.as_str()));
                }
            }
        }
        out
    }
}
