//! The integration check: decide whether a branch's changes are already in
//! the base by comparing patch ids instead of ancestry.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::CleanupError;
use crate::git::GitBackend;

/// Verdict of an integration check
#[derive(Debug, Clone)]
pub enum CheckResult {
    /// The branch has no commits beyond the merge base
    NoUniqueCommits {
        /// Common ancestor the check was anchored at
        merge_base: String,
    },
    /// A base commit carries the same diff as one of the branch's commits
    ContentMatch {
        /// Common ancestor the check was anchored at
        merge_base: String,
        /// Base commit whose patch id matched
        base_commit: String,
        /// Branch commit it matched against
        branch_commit: String,
    },
    /// No patch id overlap between the branch and the base
    NotIntegrated {
        /// Common ancestor the check was anchored at
        merge_base: String,
    },
}

impl CheckResult {
    /// Whether the branch can be deleted without losing changes.
    pub fn safe_to_remove(&self) -> bool {
        !matches!(self, CheckResult::NotIntegrated { .. })
    }

    /// The merge base the verdict was computed against.
    pub fn merge_base(&self) -> &str {
        match self {
            CheckResult::NoUniqueCommits { merge_base }
            | CheckResult::ContentMatch { merge_base, .. }
            | CheckResult::NotIntegrated { merge_base } => merge_base,
        }
    }
}

/// Fingerprint every commit in `low..high` into a patch-id -> commit map.
///
/// Colliding fingerprints keep the last commit seen; only membership matters
/// to the callers. Stops at the first fingerprint failure.
pub fn patch_ids_in_range(
    backend: &impl GitBackend,
    low: &str,
    high: &str,
) -> Result<HashMap<String, String>, CleanupError> {
    let commits = backend.commits_in_range(low, high)?;
    let mut ids = HashMap::with_capacity(commits.len());
    for commit in commits {
        let id = backend
            .patch_id(&commit)
            .map_err(|source| CleanupError::PatchId {
                commit: commit.clone(),
                source,
            })?;
        ids.insert(id, commit);
    }
    Ok(ids)
}

/// Decide whether the changes on `branch` since it diverged from `base` are
/// already represented in `base`.
///
/// Matching is content-based, so rebased, squashed, and cherry-picked
/// commits are recognized even though their hashes differ. The scan declares
/// the branch integrated on the first overlapping patch id rather than
/// requiring every branch commit to be matched: a squash-merge rarely
/// preserves each individual patch id, and full coverage would reject
/// branches that were in fact merged. The flip side is that a branch with
/// several independent changes counts as integrated when only one of them
/// was picked into the base.
pub fn is_integrated(
    backend: &impl GitBackend,
    branch: &str,
    base: &str,
) -> Result<CheckResult, CleanupError> {
    let merge_base =
        backend
            .merge_base(base, branch)
            .map_err(|source| CleanupError::MergeBase {
                base: base.to_string(),
                branch: branch.to_string(),
                source,
            })?;

    let local = patch_ids_in_range(backend, &merge_base, branch)?;
    if local.is_empty() {
        return Ok(CheckResult::NoUniqueCommits { merge_base });
    }

    let base_commits = backend.commits_in_range(&merge_base, base)?;

    // Walk oldest-first: old branches were typically integrated near the
    // merge base, so this order hits a match with fewer patch-id runs.
    for commit in base_commits.iter().rev() {
        let id = backend
            .patch_id(commit)
            .map_err(|source| CleanupError::PatchId {
                commit: commit.clone(),
                source,
            })?;
        if let Some(branch_commit) = local.get(&id) {
            debug!(base_commit = %commit, branch_commit = %branch_commit, "patch id match");
            return Ok(CheckResult::ContentMatch {
                merge_base,
                base_commit: commit.clone(),
                branch_commit: branch_commit.clone(),
            });
        }
    }

    Ok(CheckResult::NotIntegrated { merge_base })
}
