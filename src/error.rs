use thiserror::Error;

/// every way a sync run can fail; all of them end the run
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{0} must be set in {1} mode")]
    MissingSetting(&'static str, &'static str),

    #[error("pull request must contain exactly 1 commit, found {found}; squash commits before merging")]
    CommitCount { found: usize },

    #[error("HEAD has no parent commit to diff against")]
    NoParent,

    #[error("could not read {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("the admin config /{category}/ is not currently supported")]
    UnsupportedCategory { category: String },

    #[error("deletion of {path} is not supported")]
    Deletion { path: String },

    #[error("failed to update {path}: HTTP {status}")]
    HttpStatus { path: String, status: u16 },

    #[error("failed to update {path}")]
    Transport {
        path: String,
        #[source]
        source: ureq::Error,
    },
}
