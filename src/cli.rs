use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_NEIGHBORS, DEFAULT_TOP_N, DEFAULT_USER};

fn styles() -> Styles {
	let blue = Some(Color::Ansi(AnsiColor::Blue));
	Styles::styled()
		.header(Style::new().bold().fg_color(blue))
		.usage(Style::new().bold().fg_color(blue))
		.literal(Style::new().fg_color(blue))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(blue))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "kinship",
	author,
	version,
	about = "User-based collaborative filtering recommendations",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {kinship} {recommend} {recommend_args}   {recommend_desc}
  {kinship} {predict}   {predict_args}        {predict_desc}
  {kinship} {neighbors} {neighbors_args}        {neighbors_desc}
  {kinship} {evaluate}  {evaluate_args}      {evaluate_desc}",
		title = "Examples:".bright_blue().bold(),
		kinship = "kinship".bright_blue(),
		recommend = "recommend".yellow(),
		recommend_args = "-f ratings.csv -u 0 -n 5",
		recommend_desc = "Top 5 items for user 0".dimmed(),
		predict = "predict".yellow(),
		predict_args = "-u 4 -i 0",
		predict_desc = "Predict one rating".dimmed(),
		neighbors = "neighbors".yellow(),
		neighbors_args = "-u 2 -n 3",
		neighbors_desc = "Most similar users".dimmed(),
		evaluate = "evaluate".yellow(),
		evaluate_args = "-f ratings.csv",
		evaluate_desc = "Model accuracy (RMSE)".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Ratings CSV (default: $KINSHIP_RATINGS or ./ratings.csv)
	#[arg(short = 'f', long = "file", global = true, value_name = "PATH")]
	pub file: Option<PathBuf>,

	/// Treat 0 as a genuine rating; only empty fields are unrated
	#[arg(long = "zero-is-rating", global = true)]
	pub zero_is_rating: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Predict unrated items, rank the top N and report accuracy
	Recommend {
		/// Target user index (0-based)
		#[arg(short = 'u', long = "user", default_value_t = DEFAULT_USER)]
		user: usize,

		/// Number of recommendations
		#[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
		top_n: usize,

		/// Write a JSON report to a file, or '-' for stdout
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Predict ratings for a user's unrated items, or for one item
	Predict {
		/// Target user index (0-based)
		#[arg(short = 'u', long = "user", default_value_t = DEFAULT_USER)]
		user: usize,

		/// Single item index (0-based); rated items are allowed
		#[arg(short = 'i', long = "item")]
		item: Option<usize>,
	},

	/// List the users most similar to a user
	Neighbors {
		/// Target user index (0-based)
		#[arg(short = 'u', long = "user", default_value_t = DEFAULT_USER)]
		user: usize,

		/// Number of neighbors
		#[arg(short = 'n', long = "count", default_value_t = DEFAULT_NEIGHBORS)]
		count: usize,
	},

	/// Report RMSE over the known ratings
	Evaluate {
		/// Write a JSON report to a file, or '-' for stdout
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Prompt for the user and number of recommendations
	Interactive,

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
