//! Subprocess implementation of [`GitBackend`] wrapping the `git` binary.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tracing::debug;

use super::GitBackend;
use crate::errors::GitError;

/// Runs git commands in a fixed repository directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
}

impl GitCli {
    /// Create a backend running git commands in `repo_root`. Any directory
    /// inside the repository works; git resolves the repository itself.
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    /// Run a git command and return the raw Output.
    fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        debug!(cmd = %format!("git {}", args.join(" ")), "running git command");
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(spawn_error)
    }

    /// Run a git command, check for success, and return stdout trimmed.
    fn run_checked(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(command_failed(args, &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a git command and return true if the exit code is 0. Spawn
    /// failures count as false.
    fn run_bool(&self, args: &[&str]) -> bool {
        self.run(args)
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn has_upstream(&self, branch: &str) -> bool {
        self.run_bool(&["rev-parse", "--symbolic-full-name", &format!("{branch}@{{u}}")])
    }
}

impl GitBackend for GitCli {
    fn local_branches(&self) -> Result<Vec<String>, GitError> {
        // refname:short keeps the output free of decorations and markers.
        let stdout =
            self.run_checked(&["for-each-ref", "--format=%(refname:short)", "refs/heads/"])?;
        let branches = stdout
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .filter(|name| !self.has_upstream(name))
            .map(String::from)
            .collect();
        Ok(branches)
    }

    fn merge_base(&self, ref_a: &str, ref_b: &str) -> Result<String, GitError> {
        let stdout = self.run_checked(&["merge-base", ref_a, ref_b])?;
        let base = stdout.lines().next().unwrap_or("").trim().to_string();
        if base.is_empty() {
            return Err(GitError::NoMergeBase(ref_a.to_string(), ref_b.to_string()));
        }
        Ok(base)
    }

    fn commits_in_range(&self, low: &str, high: &str) -> Result<Vec<String>, GitError> {
        let stdout = self.run_checked(&["rev-list", &format!("{low}..{high}")])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// `git show <commit> | git patch-id --stable`, with the diff streaming
    /// through an OS pipe instead of being buffered here.
    fn patch_id(&self, commit: &str) -> Result<String, GitError> {
        debug!(commit, "running git show | git patch-id --stable");

        let mut show = Command::new("git")
            .args(["show", commit])
            .current_dir(&self.repo_root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        let show_stdout = show
            .stdout
            .take()
            .ok_or_else(|| GitError::Io(io::Error::other("git show stdout not captured")))?;

        let patch_id = Command::new("git")
            .args(["patch-id", "--stable"])
            .current_dir(&self.repo_root)
            .stdin(Stdio::from(show_stdout))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        // Reap the producer before propagating any consumer error.
        let show_output = show.wait_with_output().map_err(GitError::Io)?;
        let patch_id = patch_id.map_err(spawn_error)?;

        if !show_output.status.success() {
            return Err(command_failed(&["show", commit], &show_output));
        }
        if !patch_id.status.success() {
            return Err(command_failed(&["patch-id", "--stable"], &patch_id));
        }

        // Output line is "<patch-id> <commit>"; empty diffs produce nothing.
        let stdout = String::from_utf8_lossy(&patch_id.stdout);
        Ok(stdout.split_whitespace().next().unwrap_or("").to_string())
    }

    /// Force deletion. Branches integrated by squash or rebase are invisible
    /// to the ancestry check behind `git branch -d`, which would refuse them
    /// even though their changes are in the base.
    fn delete_branch(&self, branch: &str) -> Result<(), GitError> {
        self.run_checked(&["branch", "-D", branch])?;
        Ok(())
    }
}

fn spawn_error(e: io::Error) -> GitError {
    if e.kind() == io::ErrorKind::NotFound {
        GitError::BinaryNotFound
    } else {
        GitError::Io(e)
    }
}

fn command_failed(args: &[&str], output: &Output) -> GitError {
    GitError::CommandFailed {
        command: args.first().unwrap_or(&"").to_string(),
        exit_code: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}
