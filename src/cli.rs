use crate::constants::DEFAULT_ADMIN_ROOT;
use clap::Parser;
use std::path::PathBuf;

/// site-text-sync: push site text files changed by the last commit to the forum admin API
///
/// normally run from CI with no arguments; every setting is read from the environment
#[derive(Parser, Debug, Default)]
#[command(
    name = "site-text-sync",
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// admin API key, sent as the Api-Key header
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// admin API username, sent as the Api-Username header
    #[arg(long, env = "API_USER")]
    pub api_user: Option<String>,

    /// triggering CI event; "push" sends updates, anything else is a dry run
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// pull request base commit
    #[arg(long, env = "PR_BASE_SHA")]
    pub base_sha: Option<String>,

    /// pull request head commit
    #[arg(long, env = "PR_HEAD_SHA")]
    pub head_sha: Option<String>,

    /// path inside the repository to sync from
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// admin customisation root that category/key paths are appended to
    #[arg(long, env = "ADMIN_ROOT", default_value = DEFAULT_ADMIN_ROOT)]
    pub admin_root: String,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_populate_fields() {
        let cli = Cli::try_parse_from([
            "site-text-sync",
            "--api-key",
            "secret",
            "--api-user",
            "system",
            "--event-name",
            "pull_request",
            "--base-sha",
            "abc123",
            "--head-sha",
            "def456",
            "--repo",
            "/tmp/checkout",
            "--admin-root",
            "http://localhost:8080/admin/customize",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("secret"));
        assert_eq!(cli.api_user.as_deref(), Some("system"));
        assert_eq!(cli.event_name.as_deref(), Some("pull_request"));
        assert_eq!(cli.base_sha.as_deref(), Some("abc123"));
        assert_eq!(cli.head_sha.as_deref(), Some("def456"));
        assert_eq!(cli.repo, PathBuf::from("/tmp/checkout"));
        assert_eq!(cli.admin_root, "http://localhost:8080/admin/customize");
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["site-text-sync", "site_texts/faq.md"]).is_err());
    }
}
