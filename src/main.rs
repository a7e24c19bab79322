//! Kinship - collaborative filtering recommendations from the command line

use anyhow::Result;
use clap::{CommandFactory, Parser};

use kinship::cli::{Cli, Command};
use kinship::commands;
use kinship::config::{self, RunConfig};
use kinship::storage::LoadOptions;
use kinship::ui::{self, Log};

fn main() {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);

	if let Err(e) = run(cli) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	if let Some(path) = cli.file {
		config::set_source(path);
	}

	let options = if cli.zero_is_rating { LoadOptions::zero_is_rating() } else { LoadOptions::default() };

	match cli.command {
		Command::Recommend { user, top_n, export } => {
			if export.is_none() {
				ui::header("Kinship");
			}
			commands::recommend::run(&RunConfig::new(user, top_n), &options, export.as_deref())
		}
		Command::Predict { user, item } => {
			commands::predict::run(&config::source_path(), &options, user, item)
		}
		Command::Neighbors { user, count } => {
			commands::neighbors::run(&config::source_path(), &options, user, count)
		}
		Command::Evaluate { export } => {
			commands::evaluate::run(&config::source_path(), &options, export.as_deref())
		}
		Command::Interactive => {
			ui::header("Kinship");
			commands::interactive::run(&config::source_path(), &options)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand {
				Some(sub) => match cmd.find_subcommand_mut(&sub) {
					Some(sub_cmd) => sub_cmd.print_help()?,
					None => {
						ui::warn(&format!("Unknown subcommand: {}", sub));
						cmd.print_help()?;
					}
				},
				None => cmd.print_help()?,
			}
			Ok(())
		}
	}
}
