//! Command implementations shared by the git-sculpt and git-bleach binaries.

pub mod single;
pub mod sweep;
