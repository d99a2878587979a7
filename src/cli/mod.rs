//! Command implementations behind the `graphwalk` binary.

pub mod commands;
