//! Predict command - estimated ratings for one user

use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::config::RATING_PRECISION;
use crate::processing::Recommender;
use crate::storage::LoadOptions;
use crate::ui;

pub fn run(source: &Path, options: &LoadOptions, user: usize, item: Option<usize>) -> Result<()> {
	let matrix = super::load_matrix(source, options)?;
	let engine = Recommender::new(&matrix);

	let Some(item) = item else {
		let predictions = engine.predictions_for(user)?;
		ui::table::predictions(user, &predictions);
		return Ok(());
	};

	let prediction = engine.predict(user, item)?;
	let rating = format!("{:.prec$}", prediction.rating, prec = RATING_PRECISION);

	match matrix.get(user, item) {
		Some(known) => ui::info(&format!(
			"User {} already rated item {} ({})",
			user,
			item,
			format!("{:.prec$}", known, prec = RATING_PRECISION).bright_white()
		)),
		None => ui::debug(&format!("Item {} is unrated for user {}", item, user)),
	}

	if prediction.rating == 0.0 {
		ui::debug("No similar user rated this item, prediction defaults to 0");
	}

	println!(
		"{} {} {} {}",
		"User".dimmed(),
		user.to_string().bright_cyan(),
		format!("item {}:", item).dimmed(),
		rating.bright_green().bold()
	);

	Ok(())
}
