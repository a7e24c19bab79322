//! Similarity-weighted rating prediction

use std::time::Instant;

use rayon::prelude::*;

use crate::core::{cosine, Neighbor, Prediction, RatingMatrix, Recommendation, Result, SimilarityCache};
use crate::ui;

use super::rank;

/// Predict one cell from scratch, recomputing every similarity it needs.
///
/// Weighted average of the other users' ratings for `item`, weighted by
/// their similarity to `user` and normalized by the sum of absolute
/// weights. Returns 0.0 when that sum is zero.
pub fn predict(matrix: &RatingMatrix, user: usize, item: usize) -> Result<f64> {
	matrix.check_user(user)?;
	matrix.check_item(item)?;

	Ok(predict_from_row(matrix, user, matrix.row(user), item))
}

/// Predict with `target` standing in for the user's own ratings.
/// Other users' rows come from `matrix` unchanged.
pub(crate) fn predict_from_row(matrix: &RatingMatrix, user: usize, target: &[Option<f64>], item: usize) -> f64 {
	weighted_average(matrix, user, item, |other| cosine(target, matrix.row(other)))
}

fn weighted_average<F>(matrix: &RatingMatrix, user: usize, item: usize, similarity: F) -> f64
where
	F: Fn(usize) -> f64,
{
	let mut numerator = 0.0;
	let mut denominator = 0.0;

	for other in 0..matrix.users() {
		if other == user {
			continue;
		}
		let Some(rating) = matrix.get(other, item) else {
			continue;
		};
		let s = similarity(other);
		numerator += s * rating;
		denominator += s.abs();
	}

	if denominator > 0.0 {
		numerator / denominator
	} else {
		0.0
	}
}

/// Prediction engine over one immutable matrix and its similarity cache.
///
/// The cache is built once in `new`. Because the matrix is borrowed for the
/// engine's lifetime it cannot change underneath the cache; a different
/// matrix needs a new engine.
pub struct Recommender<'a> {
	matrix: &'a RatingMatrix,
	similarities: SimilarityCache,
}

impl<'a> Recommender<'a> {
	pub fn new(matrix: &'a RatingMatrix) -> Self {
		let start = Instant::now();
		let similarities = SimilarityCache::build(matrix);
		ui::debug(&format!(
			"Similarity cache for {} users built in {:.2}ms",
			matrix.users(),
			start.elapsed().as_secs_f64() * 1000.0
		));

		Self { matrix, similarities }
	}

	pub fn matrix(&self) -> &RatingMatrix {
		self.matrix
	}

	pub fn similarities(&self) -> &SimilarityCache {
		&self.similarities
	}

	/// Same result as [`predict`], without recomputing similarities
	pub fn predict(&self, user: usize, item: usize) -> Result<Prediction> {
		self.matrix.check_user(user)?;
		self.matrix.check_item(item)?;

		Ok(Prediction { user, item, rating: self.predict_unchecked(user, item) })
	}

	fn predict_unchecked(&self, user: usize, item: usize) -> f64 {
		let row = self.similarities.row(user);
		weighted_average(self.matrix, user, item, |other| row[other])
	}

	/// Predictions for every item the user has not rated, ascending item order
	pub fn predictions_for(&self, user: usize) -> Result<Vec<Prediction>> {
		let items = self.matrix.unrated_items(user)?;
		Ok(items
			.into_iter()
			.map(|item| Prediction { user, item, rating: self.predict_unchecked(user, item) })
			.collect())
	}

	/// Top `top_n` unrated items for the user
	pub fn recommend(&self, user: usize, top_n: usize) -> Result<Vec<Recommendation>> {
		let candidates = self.predictions_for(user)?.into_iter().map(Recommendation::from).collect();
		Ok(rank::rank(candidates, top_n))
	}

	/// The `k` users most similar to `user`
	pub fn neighbors(&self, user: usize, k: usize) -> Result<Vec<Neighbor>> {
		self.similarities.neighbors(user, k)
	}

	/// Copy of the matrix with every unrated cell filled by its prediction.
	/// Rated cells are kept as-is.
	pub fn complete(&self) -> RatingMatrix {
		self.fill(true)
	}

	/// Prediction for every cell, rated or not, for in-sample accuracy
	pub fn predict_all(&self) -> RatingMatrix {
		self.fill(false)
	}

	// Rows are independent, so each worker owns a disjoint output row
	fn fill(&self, keep_rated: bool) -> RatingMatrix {
		let start = Instant::now();
		let (users, items) = self.matrix.shape();
		let mut cells: Vec<Option<f64>> = vec![None; users * items];

		if items > 0 {
			cells.par_chunks_mut(items).enumerate().for_each(|(user, out)| {
				for (item, cell) in out.iter_mut().enumerate() {
					let rating = match self.matrix.get(user, item) {
						Some(rating) if keep_rated => rating,
						_ => self.predict_unchecked(user, item),
					};
					*cell = Some(rating);
				}
			});
		}

		ui::debug(&format!(
			"Predicted {}x{} matrix in {:.2}ms",
			users,
			items,
			start.elapsed().as_secs_f64() * 1000.0
		));

		RatingMatrix::from_parts(users, items, cells)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::{Axis, Error};

	fn sample() -> RatingMatrix {
		RatingMatrix::from_dense(
			vec![
				vec![5.0, 3.0, 0.0, 1.0],
				vec![4.0, 0.0, 0.0, 1.0],
				vec![1.0, 1.0, 0.0, 5.0],
				vec![1.0, 0.0, 0.0, 4.0],
				vec![0.0, 1.0, 5.0, 4.0],
			],
			0.0,
		)
		.unwrap()
	}

	#[test]
	fn test_predict_weighted_average() {
		let m = sample();
		// Users 0 through 3 rated item 0
		let ratings = [5.0, 4.0, 1.0, 1.0];
		let s: Vec<f64> = (0..4).map(|u| cosine(m.row(4), m.row(u))).collect();
		let numerator: f64 = s.iter().zip(ratings).map(|(s, r)| s * r).sum();
		let denominator: f64 = s.iter().map(|s| s.abs()).sum();
		let expected = numerator / denominator;

		let got = predict(&m, 4, 0).unwrap();
		assert!((got - expected).abs() < 1e-12);
	}

	#[test]
	fn test_predict_nobody_rated_item() {
		let m = sample();
		// Only user 4 rated item 2
		assert_eq!(predict(&m, 4, 2).unwrap(), 0.0);
	}

	#[test]
	fn test_predict_zero_similarity_everywhere() {
		let m = RatingMatrix::from_dense(vec![vec![5.0, 0.0], vec![0.0, 3.0]], 0.0).unwrap();
		assert_eq!(predict(&m, 0, 1).unwrap(), 0.0);
	}

	#[test]
	fn test_predict_invalid_indices() {
		let m = sample();
		assert!(matches!(
			predict(&m, 5, 0),
			Err(Error::InvalidIndex { axis: Axis::User, index: 5, bound: 5 })
		));
		assert!(matches!(
			predict(&m, 0, 4),
			Err(Error::InvalidIndex { axis: Axis::Item, index: 4, bound: 4 })
		));
	}

	#[test]
	fn test_recommender_matches_baseline() {
		let m = sample();
		let engine = Recommender::new(&m);

		for user in 0..m.users() {
			for item in 0..m.items() {
				let cached = engine.predict(user, item).unwrap();
				assert_eq!(cached.rating, predict(&m, user, item).unwrap());
				assert_eq!((cached.user, cached.item), (user, item));
			}
		}
	}

	#[test]
	fn test_predictions_for_unrated_only() {
		let m = sample();
		let engine = Recommender::new(&m);

		let items: Vec<usize> = engine.predictions_for(1).unwrap().iter().map(|p| p.item).collect();
		assert_eq!(items, vec![1, 2]);
		assert!(engine.predictions_for(9).is_err());
	}

	#[test]
	fn test_complete_keeps_ratings_and_fills_gaps() {
		let m = sample();
		let engine = Recommender::new(&m);
		let full = engine.complete();

		assert_eq!(full.shape(), m.shape());
		assert_eq!(full.rated_count(), 20);
		for user in 0..m.users() {
			for item in 0..m.items() {
				match m.get(user, item) {
					Some(r) => assert_eq!(full.get(user, item), Some(r)),
					None => assert_eq!(full.get(user, item), Some(predict(&m, user, item).unwrap())),
				}
			}
		}
	}

	#[test]
	fn test_predict_all_covers_rated_cells() {
		let m = sample();
		let engine = Recommender::new(&m);
		let all = engine.predict_all();

		assert_eq!(all.rated_count(), 20);
		assert_eq!(all.get(0, 0), Some(predict(&m, 0, 0).unwrap()));
		assert_eq!(all.get(0, 2), engine.complete().get(0, 2));
	}

	#[test]
	fn test_predict_from_row_matches_masked_matrix() {
		let m = sample();
		let mut target = m.row(2).to_vec();
		target[3] = None;

		let masked = m.without(2, 3);
		assert_eq!(predict_from_row(&m, 2, &target, 3), predict(&masked, 2, 3).unwrap());
	}

	#[test]
	fn test_neighbors_validates_user() {
		let m = sample();
		let engine = Recommender::new(&m);
		assert_eq!(engine.neighbors(0, 2).unwrap().len(), 2);
		assert!(engine.neighbors(5, 2).is_err());
	}
}
