//! Cosine similarity between users, restricted to co-rated items

use rayon::prelude::*;

use super::error::{Axis, Error, Result};
use super::matrix::RatingMatrix;
use super::recommendation::Neighbor;

/// Cosine similarity [-1.0, 1.0] over items both users rated.
///
/// Users with no co-rated item, or whose overlap has zero magnitude,
/// score 0.0.
pub fn cosine(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
	let mut dot = 0.0;
	let mut mag_a = 0.0;
	let mut mag_b = 0.0;

	for (x, y) in a.iter().zip(b.iter()) {
		if let (Some(x), Some(y)) = (x, y) {
			dot += x * y;
			mag_a += x * x;
			mag_b += y * y;
		}
	}

	if mag_a == 0.0 || mag_b == 0.0 {
		return 0.0;
	}

	(dot / (mag_a.sqrt() * mag_b.sqrt())).clamp(-1.0, 1.0)
}

/// Precomputed symmetric user × user similarity table
#[derive(Debug, Clone)]
pub struct SimilarityCache {
	users: usize,
	scores: Vec<f64>,
}

impl SimilarityCache {
	/// Compute every pair once. Rows of the upper triangle run in parallel.
	pub fn build(matrix: &RatingMatrix) -> Self {
		let users = matrix.users();

		let upper: Vec<Vec<f64>> = (0..users)
			.into_par_iter()
			.map(|a| {
				let row_a = matrix.row(a);
				((a + 1)..users).map(|b| cosine(row_a, matrix.row(b))).collect()
			})
			.collect();

		let mut scores = vec![0.0; users * users];
		for (a, row) in upper.into_iter().enumerate() {
			scores[a * users + a] = cosine(matrix.row(a), matrix.row(a));
			for (offset, score) in row.into_iter().enumerate() {
				let b = a + 1 + offset;
				scores[a * users + b] = score;
				scores[b * users + a] = score;
			}
		}

		Self { users, scores }
	}

	pub fn users(&self) -> usize {
		self.users
	}

	/// Similarity of a pair
	pub fn get(&self, a: usize, b: usize) -> Result<f64> {
		self.check_user(a)?;
		self.check_user(b)?;
		Ok(self.scores[a * self.users + b])
	}

	/// Similarities of one user to every user, self included.
	/// `user` must already be validated against the matrix.
	pub(crate) fn row(&self, user: usize) -> &[f64] {
		let start = user * self.users;
		&self.scores[start..start + self.users]
	}

	/// The `k` most similar other users, best first (ties keep ascending index)
	pub fn neighbors(&self, user: usize, k: usize) -> Result<Vec<Neighbor>> {
		self.check_user(user)?;

		let mut neighbors: Vec<Neighbor> = self
			.row(user)
			.iter()
			.enumerate()
			.filter(|(other, _)| *other != user)
			.map(|(other, &similarity)| Neighbor { user: other, similarity })
			.collect();

		neighbors.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal));
		neighbors.truncate(k);
		Ok(neighbors)
	}

	fn check_user(&self, user: usize) -> Result<()> {
		if user < self.users {
			Ok(())
		} else {
			Err(Error::InvalidIndex { axis: Axis::User, index: user, bound: self.users })
		}
	}
}
