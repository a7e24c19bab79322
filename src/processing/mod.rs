//! Prediction, ranking and evaluation over a rating matrix

pub mod evaluate;
pub mod predict;
pub mod rank;

pub use evaluate::{evaluate, holdout_predictions, rmse, Evaluation};
pub use predict::{predict, Recommender};
pub use rank::{rank, recommend};
