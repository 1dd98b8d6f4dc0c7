//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the library.

pub mod demo;
pub mod session;

pub use demo::run_demo;
pub use session::{run_session, run_session_stdio};
