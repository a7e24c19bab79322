//! Neighbors command - users most similar to a target user

use std::path::Path;

use anyhow::Result;

use crate::processing::Recommender;
use crate::storage::LoadOptions;
use crate::ui;

pub fn run(source: &Path, options: &LoadOptions, user: usize, count: usize) -> Result<()> {
	let matrix = super::load_matrix(source, options)?;
	let engine = Recommender::new(&matrix);

	let neighbors = engine.neighbors(user, count)?;
	let unrelated = neighbors.iter().filter(|n| n.similarity == 0.0).count();

	ui::table::neighbors(user, &neighbors);

	if unrelated > 0 {
		ui::debug(&format!("{} listed users have zero similarity to user {}", unrelated, user));
	}

	Ok(())
}
