//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod create;
pub mod init;
pub mod rules;
pub mod update;
