//! Rating matrix loading

pub mod csv;

pub use self::csv::{load, parse, LoadOptions};
