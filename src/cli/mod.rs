//! Command-line interface for ohayo.

pub mod args;
pub mod commands;
