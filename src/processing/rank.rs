//! Top-N ranking of unrated items

use crate::core::{RatingMatrix, Recommendation, Result};

use super::predict::predict;

/// Top `top_n` unrated items for `user`, predicted from scratch.
///
/// Only items the user has not rated are considered. If fewer than
/// `top_n` exist, all of them are returned.
pub fn recommend(matrix: &RatingMatrix, user: usize, top_n: usize) -> Result<Vec<Recommendation>> {
	let mut candidates = Vec::new();
	for item in matrix.unrated_items(user)? {
		candidates.push(Recommendation { item, rating: predict(matrix, user, item)? });
	}

	Ok(rank(candidates, top_n))
}

/// Sort by rating, highest first, and keep the first `top_n`.
///
/// The sort is stable, so equal ratings stay in their incoming order
/// (ascending item index when fed from a row scan).
pub fn rank(mut candidates: Vec<Recommendation>, top_n: usize) -> Vec<Recommendation> {
	candidates.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal));
	candidates.truncate(top_n);
	candidates
}
