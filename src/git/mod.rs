//! Git backend plumbing.
//!
//! This module provides:
//! - [`GitBackend`], the capability trait the checker and commands run against
//! - [`GitCli`], the subprocess implementation wrapping the `git` binary

pub mod backend;
pub mod cli;

pub use backend::GitBackend;
pub use cli::GitCli;
