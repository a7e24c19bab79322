//! Core domain types

pub mod error;
pub mod matrix;
pub mod recommendation;
pub mod similarity;

pub use error::{Axis, Error, Result};
pub use matrix::RatingMatrix;
pub use recommendation::{Neighbor, Prediction, Recommendation};
pub use similarity::{cosine, SimilarityCache};
