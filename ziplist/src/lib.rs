//! ziplist library
//!
//! Command-line layer over `ziplist-core`: argument definitions, command
//! implementations and terminal output helpers.

pub mod cli;
pub mod commands;
pub mod utils;
