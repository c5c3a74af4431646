//! Veranda - terminal frontend for the Samovar table-ordering platform
//!
//! Thin feature views over `samovar-client`: every subcommand loads the
//! session, calls the API, prints, and exits. All business decisions
//! stay on the backend; errors are rendered inline at the command
//! boundary.

pub mod cli;
pub mod commands;
pub mod context;
pub mod logger;

pub use context::AppContext;
