//! # User Interface
//!
//! Colored terminal output: log lines on stderr, result tables on stdout.

pub mod log;
pub mod table;

pub use log::{debug, error, header, info, path_link, success, warn, Log};
