//! Check one named branch and optionally remove it.
//! Usage: git-sculpt <branch> [--base <ref>] [-d]

use anyhow::Result;
use colored::Colorize;

use crate::check::is_integrated;
use crate::errors::CleanupError;
use crate::git::GitBackend;

/// Options for the single-branch check.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Reference the branch is checked against.
    pub base: String,
    /// Remove the branch when the verdict is safe.
    pub delete: bool,
}

/// Check whether `branch` is integrated into the base and report the
/// verdict. With `delete` set, a safe branch is removed and an unsafe one
/// is an error.
///
/// The branch must be a local branch without an upstream; anything else is
/// rejected before any history is queried.
pub fn execute(backend: &impl GitBackend, branch: &str, options: &CheckOptions) -> Result<()> {
    let locals = backend.local_branches()?;
    if !locals.iter().any(|b| b == branch) {
        return Err(CleanupError::BranchNotFound(branch.to_string()).into());
    }

    let result = is_integrated(backend, branch, &options.base)?;

    if result.safe_to_remove() {
        println!(
            "{} {} is safe to remove",
            "✓".green().bold(),
            format!("[{branch}]").cyan()
        );
    } else {
        println!(
            "{} {} is not in base",
            "✗".red().bold(),
            format!("[{branch}]").cyan()
        );
    }

    if options.delete {
        if !result.safe_to_remove() {
            return Err(CleanupError::NotSafe(branch.to_string()).into());
        }
        backend
            .delete_branch(branch)
            .map_err(|source| CleanupError::DeleteFailed {
                branch: branch.to_string(),
                source,
            })?;
        println!(
            "{} {} removed",
            "✓".green().bold(),
            format!("[{branch}]").cyan()
        );
    }

    Ok(())
}
