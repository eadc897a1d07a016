//! Error types for the branch integration checker.
//!
//! The backend layer reports [`GitError`]; the operations built on top of it
//! report [`CleanupError`]. Both derive `thiserror` and convert into
//! `anyhow::Error` at the command layer via the blanket impl.

use thiserror::Error;

/// Errors from invoking the git backend.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` binary was not found on `$PATH`.
    #[error("git binary not found on PATH")]
    BinaryNotFound,

    /// A git command exited with a non-zero status.
    #[error("git {command} failed (exit {exit_code}): {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// `git merge-base` succeeded but produced no common ancestor.
    #[error("cannot determine merge base of '{0}' and '{1}'")]
    NoMergeBase(String, String),

    /// Generic I/O wrapper.
    #[error("git I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from branch check and removal operations.
#[derive(Debug, Error)]
pub enum CleanupError {
    /// The merge base with the base reference could not be resolved.
    #[error("cannot resolve merge base of '{base}' and '{branch}': {source}")]
    MergeBase {
        base: String,
        branch: String,
        source: GitError,
    },

    /// A commit could not be fingerprinted.
    #[error("cannot compute patch id for commit {commit}: {source}")]
    PatchId { commit: String, source: GitError },

    /// The named branch is not among the local branches without an upstream.
    #[error("branch '{0}' not found among local branches without upstream")]
    BranchNotFound(String),

    /// Deletion was requested for a branch whose changes are not in the base.
    #[error("branch '{0}' is not in the base, refusing to delete")]
    NotSafe(String),

    /// The backend refused to delete the branch.
    #[error("failed to delete branch '{branch}': {source}")]
    DeleteFailed { branch: String, source: GitError },

    /// Any other backend query failure.
    #[error(transparent)]
    Git(#[from] GitError),
}
