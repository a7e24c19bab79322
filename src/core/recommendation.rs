//! Prediction and ranking result types

use serde::{Deserialize, Serialize};

/// Estimated rating for one (user, item) cell.
/// A rating of 0.0 means no other user rated the item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
	pub user: usize,
	pub item: usize,
	pub rating: f64,
}

/// Ranked entry for a target user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
	pub item: usize,
	pub rating: f64,
}

impl From<Prediction> for Recommendation {
	fn from(p: Prediction) -> Self {
		Self { item: p.item, rating: p.rating }
	}
}

/// Another user and their similarity to the target user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
	pub user: usize,
	pub similarity: f64,
}
