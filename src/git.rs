use crate::changeset::{ChangeSet, ChangeStatus, FileChange, is_tracked_path};
use crate::constants::REQUIRED_COMMITS;
use crate::context::{CommitRange, Mode};
use crate::error::SyncError;
use crate::status;
use anyhow::{Context, Result, anyhow};
use git2::{Delta, Repository};
use std::path::Path;

/// open the repository containing `path` (can be anywhere within the repo)
pub fn open(path: &Path) -> Result<Repository> {
    let repo = Repository::discover(path)
        .with_context(|| format!("not in a git repository: {}", path.display()))?;

    if repo.is_bare() {
        return Err(anyhow!("repository has no working tree"));
    }

    Ok(repo)
}

/// the directory file paths from the diff are relative to
pub fn workdir(repo: &Repository) -> Result<&Path> {
    repo.workdir()
        .ok_or_else(|| anyhow!("repository has no working tree"))
}

/// number of commits reachable from `head` but not from `base`, ie. `git rev-list --count base..head`
pub fn count_commits(repo: &Repository, base: &str, head: &str) -> Result<usize> {
    let base_id = resolve_commit(repo, base)?;
    let head_id = resolve_commit(repo, head)?;

    let mut walk = repo.revwalk().context("failed to create revwalk")?;
    walk.push(head_id)
        .with_context(|| format!("failed to walk from {head}"))?;
    walk.hide(base_id)
        .with_context(|| format!("failed to hide {base}"))?;

    let mut count = 0;
    for oid in walk {
        oid.context("failed to walk commit range")?;
        count += 1;
    }
    Ok(count)
}

fn resolve_commit(repo: &Repository, rev: &str) -> Result<git2::Oid> {
    let commit = repo
        .revparse_single(rev)
        .and_then(|object| object.peel_to_commit())
        .with_context(|| format!("failed to resolve commit {rev}"))?;
    Ok(commit.id())
}

/// pull requests must be squashed to a single commit before they can be synced
///
/// live runs skip the check, branch protection on the main line already disallows merge commits
pub fn validate_single_commit(
    repo: &Repository,
    mode: Mode,
    range: Option<&CommitRange>,
) -> Result<()> {
    if mode.is_live() {
        return Ok(());
    }

    let range = range.ok_or(SyncError::MissingSetting("PR_BASE_SHA", mode.name()))?;
    let found = count_commits(repo, &range.base, &range.head)?;
    if found != REQUIRED_COMMITS {
        return Err(SyncError::CommitCount { found }.into());
    }

    status!("pull request contains exactly 1 commit");
    Ok(())
}

/// files added, modified or deleted by HEAD relative to its first parent
///
/// renames are not detected, a renamed file shows up as a deletion plus an addition
pub fn get_changes(repo: &Repository) -> Result<ChangeSet> {
    let head = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .context("failed to get HEAD commit")?;
    let parent = head.parent(0).map_err(|_| SyncError::NoParent)?;

    let old_tree = parent.tree().context("failed to get parent tree")?;
    let new_tree = head.tree().context("failed to get HEAD tree")?;
    let diff = repo
        .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), None)
        .context("failed to create diff")?;

    let mut pending = Vec::new();
    let mut deleted = Vec::new();

    for delta in diff.deltas() {
        let (status, file) = match delta.status() {
            Delta::Added | Delta::Modified => (ChangeStatus::Pending, delta.new_file()),
            Delta::Deleted => (ChangeStatus::Deleted, delta.old_file()),
            _ => continue, // type changes, unreadable entries, etc.
        };

        let Some(path) = file.path() else {
            continue;
        };
        let path = path.to_string_lossy().to_string();
        if !is_tracked_path(&path) {
            continue;
        }

        let change = FileChange { status, path };
        match status {
            ChangeStatus::Pending => pending.push(change),
            ChangeStatus::Deleted => deleted.push(change),
        }
    }

    pending.append(&mut deleted);
    Ok(ChangeSet { files: pending })
}
