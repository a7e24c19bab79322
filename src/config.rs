//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_SOURCE: OnceLock<PathBuf> = OnceLock::new();

// === Input ===
pub const DEFAULT_SOURCE: &str = "ratings.csv";
pub const SOURCE_ENV: &str = "KINSHIP_RATINGS";
pub const UNRATED_SENTINEL: f64 = 0.0;

// === Recommendation Defaults ===
pub const DEFAULT_USER: usize = 0;
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_NEIGHBORS: usize = 5;

// === Display ===
pub const RATING_PRECISION: usize = 2;
pub const RMSE_PRECISION: usize = 4;

pub fn set_source(path: PathBuf) {
	let _ = CUSTOM_SOURCE.set(path);
}

/// Ratings file: explicit path, then KINSHIP_RATINGS, then ./ratings.csv
pub fn source_path() -> PathBuf {
	if let Some(custom) = CUSTOM_SOURCE.get() {
		crate::ui::debug(&format!("Using ratings file: {}", custom.display()));
		return custom.clone();
	}

	resolve_source()
}

fn resolve_source() -> PathBuf {
	if let Ok(env_path) = std::env::var(SOURCE_ENV) {
		if !env_path.trim().is_empty() {
			crate::ui::debug(&format!("Using {}: {}", SOURCE_ENV, env_path));
			return PathBuf::from(env_path);
		}
	}

	PathBuf::from(DEFAULT_SOURCE)
}

/// Parameters of one recommendation run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
	pub user_index: usize,
	pub top_n: usize,
	pub source_path: PathBuf,
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			user_index: DEFAULT_USER,
			top_n: DEFAULT_TOP_N,
			source_path: PathBuf::from(DEFAULT_SOURCE),
		}
	}
}

impl RunConfig {
	pub fn new(user_index: usize, top_n: usize) -> Self {
		Self {
			user_index,
			top_n,
			source_path: source_path(),
		}
	}
}
