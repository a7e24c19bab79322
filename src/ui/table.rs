//! Console tables for predictions, recommendations and neighbors

use colored::*;

use crate::config::{RATING_PRECISION, RMSE_PRECISION};
use crate::core::{Neighbor, Prediction, Recommendation};

use super::log::{color_gradient, header};

const ID_WIDTH: usize = 10;
const VALUE_WIDTH: usize = 20;

fn column_titles(id: &str, value: &str) {
	println!(
		"{}",
		format!("{:>id_w$}{:>val_w$}", id, value, id_w = ID_WIDTH, val_w = VALUE_WIDTH).dimmed()
	);
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
	values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Right-aligned row; padding is applied before coloring so escapes don't skew widths
fn row(id: usize, value: f64, min: f64, max: f64) {
	let padded = format!("{:>width$.prec$}", value, width = VALUE_WIDTH, prec = RATING_PRECISION);
	let colored = color_gradient(value, min, max, true);
	let lead = padded.len() - padded.trim_start().len();
	println!("{:>id_w$}{}{}", id, " ".repeat(lead), colored, id_w = ID_WIDTH);
}

pub fn predictions(user: usize, predictions: &[Prediction]) {
	header(&format!("Predicted ratings for unrated items of user {}", user));
	if predictions.is_empty() {
		println!("  {}", "User has rated every item".dimmed());
		return;
	}

	column_titles("Item ID", "Predicted Rating");
	let (min, max) = bounds(predictions.iter().map(|p| p.rating));
	for p in predictions {
		row(p.item, p.rating, min, max);
	}
}

pub fn recommendations(user: usize, top_n: usize, recs: &[Recommendation]) {
	header(&format!("Top {} recommendations for user {}", top_n, user));
	if recs.is_empty() {
		println!("  {}", "Nothing to recommend".dimmed());
		return;
	}

	column_titles("Item ID", "Predicted Rating");
	let (min, max) = bounds(recs.iter().map(|r| r.rating));
	for r in recs {
		row(r.item, r.rating, min, max);
	}
}

pub fn neighbors(user: usize, neighbors: &[Neighbor]) {
	header(&format!("Users most similar to user {}", user));
	if neighbors.is_empty() {
		println!("  {}", "No other users".dimmed());
		return;
	}

	column_titles("User ID", "Similarity");
	for n in neighbors {
		row(n.user, n.similarity, -1.0, 1.0);
	}
}

pub fn rmse(label: &str, value: f64) {
	println!(
		"{} {}",
		format!("{}:", label).bright_blue(),
		format!("{:.prec$}", value, prec = RMSE_PRECISION).bright_white().bold()
	);
}
