//! Evaluate command - model accuracy over the known ratings

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::processing::{evaluate, Evaluation, Recommender};
use crate::storage::LoadOptions;
use crate::ui;

#[derive(Debug, Serialize)]
struct EvaluationExport {
	timestamp: String,
	source: String,
	users: usize,
	items: usize,
	density: f64,
	accuracy: Evaluation,
}

pub fn run(source: &Path, options: &LoadOptions, export: Option<&Path>) -> Result<()> {
	let matrix = super::load_matrix(source, options)?;
	let start = Instant::now();

	let engine = Recommender::new(&matrix);
	let accuracy = evaluate(&engine)?;

	if let Some(export_path) = export {
		let data = EvaluationExport {
			timestamp: chrono::Utc::now().to_rfc3339(),
			source: source.to_string_lossy().to_string(),
			users: matrix.users(),
			items: matrix.items(),
			density: matrix.density(),
			accuracy,
		};
		return super::write_export(&data, export_path);
	}

	ui::header("Accuracy");
	println!(
		"  {} {} of {} cells ({:.1}%)",
		"Known ratings:".bright_blue(),
		accuracy.rated_cells,
		matrix.users() * matrix.items(),
		matrix.density() * 100.0
	);
	ui::table::rmse("  In-sample RMSE", accuracy.fit_rmse);
	ui::table::rmse("  Leave-one-out RMSE", accuracy.holdout_rmse);

	eprintln!(
		"\n{}",
		format!("Completed in {:.1}ms", start.elapsed().as_secs_f64() * 1000.0).dimmed()
	);

	Ok(())
}
