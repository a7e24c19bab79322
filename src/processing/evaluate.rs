//! Accuracy evaluation (RMSE)

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::core::{Error, RatingMatrix, Result};
use crate::ui;

use super::predict::{predict_from_row, Recommender};

/// Root-mean-square error over the cells `original` has rated.
///
/// Both matrices must have the same shape, and `predicted` must hold a
/// value wherever `original` does.
pub fn rmse(original: &RatingMatrix, predicted: &RatingMatrix) -> Result<f64> {
	if original.shape() != predicted.shape() {
		return Err(Error::DimensionMismatch {
			expected: original.shape(),
			found: predicted.shape(),
		});
	}

	let mut sum = 0.0;
	let mut count = 0usize;

	for (user, row) in original.rows().enumerate() {
		for (item, cell) in row.iter().enumerate() {
			let Some(actual) = cell else { continue };
			let estimate = predicted
				.get(user, item)
				.ok_or(Error::MissingPrediction { user, item })?;
			sum += (actual - estimate).powi(2);
			count += 1;
		}
	}

	if count == 0 {
		return Err(Error::EmptyRatedSet);
	}

	Ok((sum / count as f64).sqrt())
}

/// Leave-one-out predictions: each rated cell is predicted with that single
/// rating hidden from its own user. Unrated cells stay unrated.
pub fn holdout_predictions(matrix: &RatingMatrix) -> RatingMatrix {
	let start = Instant::now();
	let (users, items) = matrix.shape();

	let cells: Vec<Option<f64>> = (0..users)
		.into_par_iter()
		.flat_map_iter(|user| {
			let row = matrix.row(user);
			let mut masked = row.to_vec();
			(0..items)
				.map(|item| {
					row[item]?;
					masked[item] = None;
					let estimate = predict_from_row(matrix, user, &masked, item);
					masked[item] = row[item];
					Some(estimate)
				})
				.collect::<Vec<_>>()
		})
		.collect();

	ui::debug(&format!(
		"Holdout predictions for {} rated cells in {:.2}ms",
		matrix.rated_count(),
		start.elapsed().as_secs_f64() * 1000.0
	));

	RatingMatrix::from_parts(users, items, cells)
}

/// Accuracy summary for one matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
	/// RMSE of in-sample predictions against the known ratings
	pub fit_rmse: f64,
	/// RMSE of leave-one-out predictions against the known ratings
	pub holdout_rmse: f64,
	pub rated_cells: usize,
}

pub fn evaluate(engine: &Recommender<'_>) -> Result<Evaluation> {
	let matrix = engine.matrix();
	let fit_rmse = rmse(matrix, &engine.predict_all())?;
	let holdout_rmse = rmse(matrix, &holdout_predictions(matrix))?;

	Ok(Evaluation {
		fit_rmse,
		holdout_rmse,
		rated_cells: matrix.rated_count(),
	})
}
