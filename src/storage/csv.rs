//! Rating matrix loader for comma-separated files
//!
//! One user per line, one item per field. Empty fields are unrated, and
//! so are fields equal to the configured sentinel.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord, Trim};

use crate::config::UNRATED_SENTINEL;
use crate::core::{Error, RatingMatrix, Result};
use crate::ui;

const DELIMITER: u8 = b',';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
	/// Value that marks an unrated cell; `None` makes every number a rating
	pub sentinel: Option<f64>,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self { sentinel: Some(UNRATED_SENTINEL) }
	}
}

impl LoadOptions {
	/// Treat 0 as a genuine rating; only empty fields are unrated
	pub fn zero_is_rating() -> Self {
		Self { sentinel: None }
	}
}

/// Load a rating matrix from a file
pub fn load(path: &Path, options: &LoadOptions) -> Result<RatingMatrix> {
	let file = File::open(path)?;
	let matrix = parse(file, options)?;

	ui::debug(&format!(
		"Loaded {}x{} matrix from {} ({:.0}% rated)",
		matrix.users(),
		matrix.items(),
		path.display(),
		matrix.density() * 100.0
	));

	Ok(matrix)
}

/// Parse rows from any reader. Blank lines are skipped, fields may be quoted.
///
/// Every row must have as many fields as the first one; a short or long
/// row fails with the 1-based line it sits on.
pub fn parse<R: Read>(mut reader: R, options: &LoadOptions) -> Result<RatingMatrix> {
	let mut data = Vec::new();
	reader.read_to_end(&mut data)?;

	let mut reader = ReaderBuilder::new()
		.has_headers(false)
		.delimiter(DELIMITER)
		.trim(Trim::All)
		.flexible(true)
		.from_reader(data.as_slice());

	let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
	let mut record = StringRecord::new();

	while reader.read_record(&mut record)? {
		if is_blank(&record) {
			continue;
		}

		let line = record_line(&data, &record).unwrap_or(rows.len() + 1);

		if let Some(first) = rows.first() {
			if record.len() != first.len() {
				return Err(Error::RaggedLine {
					line,
					expected: first.len(),
					found: record.len(),
				});
			}
		}

		let row = record
			.iter()
			.enumerate()
			.map(|(col, field)| parse_field(field, line, col + 1, options))
			.collect::<Result<Vec<_>>>()?;
		rows.push(row);
	}

	RatingMatrix::from_rows(rows)
}

/// 1-based line a record starts on.
///
/// Records are stamped with the position where reading began, which sits
/// before any empty lines the reader skipped on the way.
fn record_line(data: &[u8], record: &StringRecord) -> Option<usize> {
	let pos = record.position()?;
	let skipped = data
		.get(pos.byte() as usize..)?
		.iter()
		.take_while(|&&b| b == b'\n' || b == b'\r')
		.filter(|&&b| b == b'\n')
		.count();
	Some(pos.line() as usize + skipped)
}

// A whitespace-only line trims down to one empty field
fn is_blank(record: &StringRecord) -> bool {
	record.iter().all(str::is_empty) && record.len() <= 1
}

fn parse_field(field: &str, line: usize, column: usize, options: &LoadOptions) -> Result<Option<f64>> {
	if field.is_empty() {
		return Ok(None);
	}

	let value: f64 = field.parse().map_err(|_| Error::Parse {
		line,
		column,
		value: field.to_string(),
	})?;

	if !value.is_finite() {
		return Err(Error::Parse { line, column, value: field.to_string() });
	}

	if options.sentinel == Some(value) {
		Ok(None)
	} else {
		Ok(Some(value))
	}
}
