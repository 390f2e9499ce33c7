use crate::error::SyncError;
use std::fs;
use std::path::Path;

/// how a file changed in the synced commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    /// added or modified; contents still need loading from the working tree
    Pending,
    Deleted,
}

/// a single changed file, repository-relative with `/` separators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub status: ChangeStatus,
    pub path: String,
}

/// files changed by the synced commit, pending entries first, each group in diff order
#[derive(Debug, Default)]
pub struct ChangeSet {
    pub files: Vec<FileChange>,
}

/// what to do with the remote copy of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub path: String,
    pub content: Content,
}

/// only files inside a directory, and never dotfiles, are synced
pub fn is_tracked_path(path: &str) -> bool {
    !path.starts_with('.') && path.contains('/')
}

impl ChangeSet {
    /// read the current contents of every pending file from the working tree
    ///
    /// the first unreadable file aborts loading, so a partial set of updates is never produced
    pub fn load(&self, workdir: &Path) -> Result<Vec<Update>, SyncError> {
        self.files
            .iter()
            .map(|file| {
                let content = match file.status {
                    ChangeStatus::Deleted => Content::Deleted,
                    ChangeStatus::Pending => {
                        let text = fs::read_to_string(workdir.join(&file.path)).map_err(
                            |source| SyncError::Unreadable {
                                path: file.path.clone(),
                                source,
                            },
                        )?;
                        Content::Text(text)
                    }
                };
                Ok(Update {
                    path: file.path.clone(),
                    content,
                })
            })
            .collect()
    }
}
