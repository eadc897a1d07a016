//! The capability interface the checker and commands run against.

use crate::errors::GitError;

/// Queries and mutations the integration check needs from a git backend.
///
/// Modeled as a trait so the decision logic can be exercised against an
/// in-memory fake without invoking any real backend.
pub trait GitBackend {
    /// Local branches with no configured upstream, in ref iteration order.
    fn local_branches(&self) -> Result<Vec<String>, GitError>;

    /// Nearest common ancestor of two references.
    fn merge_base(&self, ref_a: &str, ref_b: &str) -> Result<String, GitError>;

    /// Commits reachable from `high` but not from `low`, newest first.
    /// An empty range yields an empty vector, not an error.
    fn commits_in_range(&self, low: &str, high: &str) -> Result<Vec<String>, GitError>;

    /// Content fingerprint of a commit's diff, invariant to hash, author,
    /// and message. Empty diffs fingerprint to the empty string.
    fn patch_id(&self, commit: &str) -> Result<String, GitError>;

    /// Delete a local branch.
    fn delete_branch(&self, branch: &str) -> Result<(), GitError>;
}
