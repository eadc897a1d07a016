//! Sweep every eligible branch: report verdicts, prompt per branch, or
//! remove all safe branches at once.
//! Usage: git-bleach [--base <ref>] [-i | --all [-y]]

use anyhow::Result;
use colored::Colorize;

use crate::check::is_integrated;
use crate::errors::CleanupError;
use crate::git::GitBackend;
use crate::prompt::confirm;

/// Options shared by the sweep modes.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Reference branches are checked against.
    pub base: String,
    /// Skip the aggregate confirmation in remove-all mode.
    pub assume_yes: bool,
}

/// Local branches without upstream, minus the base itself. The base is
/// never a removal candidate.
fn eligible_branches(
    backend: &impl GitBackend,
    base: &str,
) -> Result<Vec<String>, CleanupError> {
    Ok(backend
        .local_branches()?
        .into_iter()
        .filter(|branch| branch != base)
        .collect())
}

/// Check every eligible branch and print its verdict. Deletes nothing.
pub fn report(backend: &impl GitBackend, options: &SweepOptions) -> Result<()> {
    let branches = eligible_branches(backend, &options.base)?;
    if branches.is_empty() {
        println!("Nothing to do.");
        return Ok(());
    }

    let mut safe = 0usize;
    for branch in &branches {
        if is_integrated(backend, branch, &options.base)?.safe_to_remove() {
            safe += 1;
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
    }

    println!();
    println!("{safe} of {} branches safe to remove", branches.len());
    Ok(())
}

/// Check every eligible branch and prompt before each safe removal.
/// Branches that are not safe are reported and skipped without prompting.
pub fn interactive(backend: &impl GitBackend, options: &SweepOptions) -> Result<()> {
    interactive_with(backend, options, confirm)
}

/// Like [`interactive`] but with the confirmation injected.
fn interactive_with(
    backend: &impl GitBackend,
    options: &SweepOptions,
    mut approve: impl FnMut(&str) -> Result<bool>,
) -> Result<()> {
    let branches = eligible_branches(backend, &options.base)?;
    if branches.is_empty() {
        println!("Nothing to do.");
        return Ok(());
    }

    for branch in &branches {
        if !is_integrated(backend, branch, &options.base)?.safe_to_remove() {
            println!(
                "{} {} is not safe to remove, skip it",
                "─".dimmed(),
                format!("[{branch}]").cyan()
            );
            continue;
        }

        println!(
            "{} {} is safe to remove",
            "✓".green().bold(),
            format!("[{branch}]").cyan()
        );
        if approve(&format!("Remove [{branch}]?"))? {
            delete(backend, branch)?;
        } else {
            println!("{} skipped", "─".dimmed());
        }
    }

    Ok(())
}

/// Split the eligible branches into integrated and not-integrated sets.
pub fn partition_branches(
    backend: &impl GitBackend,
    base: &str,
) -> Result<(Vec<String>, Vec<String>), CleanupError> {
    let mut to_remove = Vec::new();
    let mut to_keep = Vec::new();

    for branch in eligible_branches(backend, base)? {
        if is_integrated(backend, &branch, base)?.safe_to_remove() {
            to_remove.push(branch);
        } else {
            to_keep.push(branch);
        }
    }

    Ok((to_remove, to_keep))
}

/// Both partition lists under bold headers; empty lists render nothing.
fn partition_summary(to_remove: &[String], to_keep: &[String]) -> String {
    let mut out = String::new();
    if !to_remove.is_empty() {
        out.push_str(&format!("{}\n", "Branches to remove:".bold()));
        for branch in to_remove {
            out.push_str(&format!("  {} {}\n", "✓".green().bold(), branch.cyan()));
        }
    }
    if !to_keep.is_empty() {
        out.push_str(&format!("{}\n", "Branches to keep:".bold()));
        for branch in to_keep {
            out.push_str(&format!("  {} {}\n", "✗".red().bold(), branch.cyan()));
        }
    }
    out
}

/// Remove every integrated branch after a single aggregate confirmation.
/// A declined confirmation removes nothing and is not an error. An empty
/// remove set still lists the kept branches before returning.
pub fn remove_all(backend: &impl GitBackend, options: &SweepOptions) -> Result<()> {
    let (to_remove, to_keep) = partition_branches(backend, &options.base)?;

    print!("{}", partition_summary(&to_remove, &to_keep));
    if to_remove.is_empty() {
        println!("Nothing to do.");
        return Ok(());
    }
    println!();

    if !options.assume_yes && !confirm(&format!("Remove {} branch(es)?", to_remove.len()))? {
        println!("Aborted.");
        return Ok(());
    }

    for branch in &to_remove {
        delete(backend, branch)?;
    }

    Ok(())
}

fn delete(backend: &impl GitBackend, branch: &str) -> Result<()> {
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
    Ok(())
}
