pub mod check;
pub mod commands;
pub mod errors;
pub mod git;
pub mod prompt;
