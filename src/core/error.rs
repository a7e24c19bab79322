//! Error taxonomy for the recommendation core and its loader

use std::fmt;

use thiserror::Error;

/// Which matrix axis an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
	User,
	Item,
}

impl fmt::Display for Axis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Axis::User => write!(f, "user"),
			Axis::Item => write!(f, "item"),
		}
	}
}

#[derive(Error, Debug)]
pub enum Error {
	#[error("Invalid {axis} index {index} (expected 0..{bound})")]
	InvalidIndex { axis: Axis, index: usize, bound: usize },

	#[error("Dimension mismatch: expected {}x{}, found {}x{}", expected.0, expected.1, found.0, found.1)]
	DimensionMismatch {
		expected: (usize, usize),
		found: (usize, usize),
	},

	#[error("No rated cells to evaluate")]
	EmptyRatedSet,

	#[error("Missing prediction for user {user}, item {item}")]
	MissingPrediction { user: usize, item: usize },

	#[error("Rating matrix has no rows")]
	EmptyMatrix,

	#[error("Row {row} has {found} columns, expected {expected}")]
	RaggedRow { row: usize, expected: usize, found: usize },

	#[error("Line {line} has {found} fields, expected {expected}")]
	RaggedLine { line: usize, expected: usize, found: usize },

	#[error("Rating at row {row}, column {column} is not a finite number")]
	NonFiniteRating { row: usize, column: usize },

	#[error("Line {line}, column {column}: '{value}' is not a valid rating")]
	Parse { line: usize, column: usize, value: String },

	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_index_display() {
		let err = Error::InvalidIndex { axis: Axis::User, index: 7, bound: 5 };
		assert_eq!(err.to_string(), "Invalid user index 7 (expected 0..5)");

		let err = Error::InvalidIndex { axis: Axis::Item, index: 4, bound: 4 };
		assert_eq!(err.to_string(), "Invalid item index 4 (expected 0..4)");
	}

	#[test]
	fn test_dimension_mismatch_display() {
		let err = Error::DimensionMismatch { expected: (5, 4), found: (5, 3) };
		assert_eq!(err.to_string(), "Dimension mismatch: expected 5x4, found 5x3");
	}

	#[test]
	fn test_parse_display() {
		let err = Error::Parse { line: 3, column: 2, value: "abc".to_string() };
		assert_eq!(err.to_string(), "Line 3, column 2: 'abc' is not a valid rating");
	}

	#[test]
	fn test_error_from_io() {
		let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
		let err: Error = io_err.into();
		assert!(err.to_string().contains("IO error"));
	}
}
