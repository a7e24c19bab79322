//! Recommend command - full report for one user

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::config::RunConfig;
use crate::core::{Error, Prediction, RatingMatrix, Recommendation};
use crate::processing::{evaluate, Evaluation, Recommender};
use crate::storage::LoadOptions;
use crate::ui;

#[derive(Debug, Serialize)]
pub struct RecommendReport {
	pub timestamp: String,
	pub source: String,
	pub users: usize,
	pub items: usize,
	pub user: usize,
	pub top_n: usize,
	pub predictions: Vec<Prediction>,
	pub recommendations: Vec<Recommendation>,
	/// Absent when the matrix holds no ratings at all
	pub accuracy: Option<Evaluation>,
}

/// Predictions, ranking and accuracy for `config.user_index`
pub fn build_report(matrix: &RatingMatrix, config: &RunConfig) -> Result<RecommendReport> {
	let engine = Recommender::new(matrix);
	let predictions = engine.predictions_for(config.user_index)?;
	let recommendations = engine.recommend(config.user_index, config.top_n)?;
	let accuracy = match evaluate(&engine) {
		Ok(eval) => Some(eval),
		Err(Error::EmptyRatedSet) => None,
		Err(e) => return Err(e.into()),
	};

	Ok(RecommendReport {
		timestamp: chrono::Utc::now().to_rfc3339(),
		source: config.source_path.to_string_lossy().to_string(),
		users: matrix.users(),
		items: matrix.items(),
		user: config.user_index,
		top_n: config.top_n,
		predictions,
		recommendations,
		accuracy,
	})
}

pub fn run(config: &RunConfig, options: &LoadOptions, export: Option<&Path>) -> Result<()> {
	let matrix = super::load_matrix(&config.source_path, options)?;
	report(&matrix, config, export)
}

/// Build and print (or export) the report for an already loaded matrix
pub fn report(matrix: &RatingMatrix, config: &RunConfig, export: Option<&Path>) -> Result<()> {
	let start = Instant::now();

	ui::debug(&format!(
		"Recommending: user={}, top_n={}, source={}",
		config.user_index,
		config.top_n,
		config.source_path.display()
	));

	let report = build_report(matrix, config)?;

	if let Some(export_path) = export {
		return super::write_export(&report, export_path);
	}

	ui::table::predictions(report.user, &report.predictions);
	ui::table::recommendations(report.user, report.top_n, &report.recommendations);

	if report.recommendations.len() < report.top_n && !report.predictions.is_empty() {
		ui::debug(&format!(
			"Only {} unrated items available for user {}",
			report.predictions.len(),
			report.user
		));
	}

	println!();
	match &report.accuracy {
		Some(accuracy) => {
			ui::table::rmse("Root Mean Square Error (RMSE)", accuracy.fit_rmse);
			ui::table::rmse("Leave-one-out RMSE", accuracy.holdout_rmse);
		}
		None => ui::warn("No known ratings, RMSE is undefined"),
	}

	eprintln!(
		"\n{}",
		format!("Completed in {:.1}ms", start.elapsed().as_secs_f64() * 1000.0).dimmed()
	);

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_build_report() {
		let matrix = RatingMatrix::from_dense(
			vec![
				vec![5.0, 3.0, 0.0, 1.0],
				vec![4.0, 0.0, 0.0, 1.0],
				vec![1.0, 1.0, 0.0, 5.0],
				vec![1.0, 0.0, 0.0, 4.0],
				vec![0.0, 1.0, 5.0, 4.0],
			],
			0.0,
		)
		.unwrap();
		let config = RunConfig { user_index: 1, top_n: 1, source_path: PathBuf::from("ratings.csv") };

		let report = build_report(&matrix, &config).unwrap();
		assert_eq!((report.users, report.items), (5, 4));
		assert_eq!(report.predictions.len(), 2);
		assert_eq!(report.recommendations.len(), 1);
		assert_eq!(report.accuracy.unwrap().rated_cells, 13);

		let json = serde_json::to_value(&report).unwrap();
		assert_eq!(json["user"], 1);
		assert_eq!(json["recommendations"].as_array().unwrap().len(), 1);
		assert!(json["accuracy"]["holdout_rmse"].is_number());
	}

	#[test]
	fn test_build_report_without_ratings() {
		let matrix = RatingMatrix::from_dense(vec![vec![0.0, 0.0], vec![0.0, 0.0]], 0.0).unwrap();
		let config = RunConfig { user_index: 0, top_n: 5, source_path: PathBuf::from("r.csv") };

		let report = build_report(&matrix, &config).unwrap();
		assert!(report.accuracy.is_none());
		assert_eq!(report.recommendations.len(), 2);
		assert!(report.recommendations.iter().all(|r| r.rating == 0.0));
	}

	#[test]
	fn test_build_report_invalid_user() {
		let matrix = RatingMatrix::from_dense(vec![vec![1.0, 0.0]], 0.0).unwrap();
		let config = RunConfig { user_index: 4, top_n: 1, source_path: PathBuf::from("r.csv") };
		assert!(build_report(&matrix, &config).is_err());
	}
}
