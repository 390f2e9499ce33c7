use crate::cli::Cli;
use crate::constants::LIVE_EVENT;
use crate::error::SyncError;
use std::fmt;
use std::path::PathBuf;

/// whether updates are actually sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// pull request: enforce the single-commit rule, only print what would be sent
    DryRun,
    /// push to the main line: send every update
    Live,
}

impl Mode {
    pub fn from_event(event_name: Option<&str>) -> Self {
        if event_name == Some(LIVE_EVENT) {
            Self::Live
        } else {
            Self::DryRun
        }
    }

    pub fn is_live(self) -> bool {
        self == Self::Live
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::DryRun => "dry run",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// values for the Api-Key and Api-Username headers
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub api_key: String,
    pub api_user: String,
}

/// pull request commit range, `base..head`
#[derive(Debug, Clone)]
pub struct CommitRange {
    pub base: String,
    pub head: String,
}

/// validated, read-only configuration for a single run
#[derive(Debug, Clone)]
pub struct SyncContext {
    pub mode: Mode,
    pub credentials: Credentials,
    /// only present (and required) in dry run mode
    pub commit_range: Option<CommitRange>,
    pub admin_root: String,
    pub repo_path: PathBuf,
}

impl SyncContext {
    pub fn from_cli(cli: Cli) -> Result<Self, SyncError> {
        let mode = Mode::from_event(cli.event_name.as_deref());

        let commit_range = match mode {
            Mode::Live => None,
            Mode::DryRun => Some(CommitRange {
                base: require(cli.base_sha, "PR_BASE_SHA", mode)?,
                head: require(cli.head_sha, "PR_HEAD_SHA", mode)?,
            }),
        };

        // dry runs never send requests, so credentials may be absent
        let credentials = match mode {
            Mode::Live => Credentials {
                api_key: require(cli.api_key, "API_KEY", mode)?,
                api_user: require(cli.api_user, "API_USER", mode)?,
            },
            Mode::DryRun => Credentials {
                api_key: cli.api_key.unwrap_or_default(),
                api_user: cli.api_user.unwrap_or_default(),
            },
        };

        Ok(Self {
            mode,
            credentials,
            commit_range,
            admin_root: cli.admin_root.trim_end_matches('/').to_string(),
            repo_path: cli.repo,
        })
    }
}

/// treat unset and empty-string settings the same way, as CI often exports empty values
fn require(value: Option<String>, name: &'static str, mode: Mode) -> Result<String, SyncError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(SyncError::MissingSetting(name, mode.name()))
}
