//! Interactive mode - prompt for the user and number of recommendations

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::config::RunConfig;
use crate::core::RatingMatrix;
use crate::storage::LoadOptions;

pub fn run(source: &Path, options: &LoadOptions) -> Result<()> {
	let matrix = super::load_matrix(source, options)?;
	let stdin = io::stdin();
	let mut input = stdin.lock();

	let user_index = read_user(&matrix, &mut input)?;
	let top_n = read_count(&mut input)?;

	println!();
	let config = RunConfig { user_index, top_n, source_path: source.to_path_buf() };
	super::recommend::report(&matrix, &config, None)
}

fn prompt(message: &str) -> Result<()> {
	print!("{} ", message.bright_blue().bold());
	io::stdout().flush()?;
	Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
	let mut line = String::new();
	if input.read_line(&mut line)? == 0 {
		bail!("Input closed before a value was entered");
	}
	Ok(line.trim().to_string())
}

/// Re-prompts until the answer is a user index inside the matrix
fn read_user<R: BufRead>(matrix: &RatingMatrix, input: &mut R) -> Result<usize> {
	prompt(&format!("Enter the user index (0 to {}):", matrix.users() - 1))?;

	loop {
		match parse_user(&read_line(input)?, matrix.users()) {
			Some(user) => return Ok(user),
			None => prompt("Invalid user index. Please try again:")?,
		}
	}
}

fn read_count<R: BufRead>(input: &mut R) -> Result<usize> {
	prompt("Enter the number of recommendations:")?;

	loop {
		match read_line(input)?.parse::<usize>() {
			Ok(n) => return Ok(n),
			Err(_) => prompt("Invalid number. Please try again:")?,
		}
	}
}

fn parse_user(answer: &str, users: usize) -> Option<usize> {
	answer.parse::<usize>().ok().filter(|&u| u < users)
}
