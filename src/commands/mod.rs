//! # Command Implementations
//!
//! Each submodule handles one CLI command (recommend, predict, etc.).

pub mod evaluate;
pub mod interactive;
pub mod neighbors;
pub mod predict;
pub mod recommend;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::core::RatingMatrix;
use crate::storage::{self, LoadOptions};
use crate::ui;

/// Load the ratings file, logging its shape
pub fn load_matrix(path: &Path, options: &LoadOptions) -> Result<RatingMatrix> {
	let start = Instant::now();
	let matrix = storage::load(path, options)
		.with_context(|| format!("Failed to load ratings from {}", path.display()))?;

	ui::success(&format!(
		"Loaded {} users × {} items from {} in {:.1}ms",
		matrix.users(),
		matrix.items(),
		ui::path_link(path, 40),
		start.elapsed().as_secs_f64() * 1000.0
	));

	Ok(matrix)
}

/// Write pretty JSON to a file, or stdout for "-"
pub fn write_export<T: serde::Serialize>(data: &T, export_path: &Path) -> Result<()> {
	let json = serde_json::to_string_pretty(data)?;

	if export_path.to_str() == Some("-") || export_path.as_os_str().is_empty() {
		println!("{}", json);
	} else {
		std::fs::write(export_path, json)
			.with_context(|| format!("Failed to write {}", export_path.display()))?;
		ui::success(&format!("Exported to {}", export_path.display()));
	}

	Ok(())
}
