//! User × item rating matrix
//!
//! Rows are users and columns are items, both 0-based. Each cell either
//! holds a genuine rating or is unrated. Storage is a single row-major
//! buffer so a user's ratings are always one contiguous slice.

use super::error::{Axis, Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct RatingMatrix {
	users: usize,
	items: usize,
	cells: Vec<Option<f64>>,
}

impl RatingMatrix {
	/// Build from explicit rows, validating shape and values.
	///
	/// Requires at least one row, equal-length rows, and finite ratings.
	pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self> {
		let Some(first) = rows.first() else {
			return Err(Error::EmptyMatrix);
		};
		let items = first.len();
		let users = rows.len();
		let mut cells = Vec::with_capacity(users * items);

		for (row_idx, row) in rows.into_iter().enumerate() {
			if row.len() != items {
				return Err(Error::RaggedRow {
					row: row_idx,
					expected: items,
					found: row.len(),
				});
			}
			for (column, cell) in row.iter().enumerate() {
				if matches!(cell, Some(v) if !v.is_finite()) {
					return Err(Error::NonFiniteRating { row: row_idx, column });
				}
			}
			cells.extend(row);
		}

		Ok(Self { users, items, cells })
	}

	/// Build from dense values where `sentinel` marks an unrated cell
	pub fn from_dense(rows: Vec<Vec<f64>>, sentinel: f64) -> Result<Self> {
		let rows = rows
			.into_iter()
			.map(|row| {
				row.into_iter()
					.map(|v| if v == sentinel { None } else { Some(v) })
					.collect()
			})
			.collect();
		Self::from_rows(rows)
	}

	pub fn users(&self) -> usize {
		self.users
	}

	pub fn items(&self) -> usize {
		self.items
	}

	/// (users, items)
	pub fn shape(&self) -> (usize, usize) {
		(self.users, self.items)
	}

	/// Rating at a cell, `None` when unrated or out of bounds
	pub fn get(&self, user: usize, item: usize) -> Option<f64> {
		if user >= self.users || item >= self.items {
			return None;
		}
		self.cells[user * self.items + item]
	}

	pub fn is_rated(&self, user: usize, item: usize) -> bool {
		self.get(user, item).is_some()
	}

	/// All cells of one user. Panics if `user` is out of bounds.
	pub fn row(&self, user: usize) -> &[Option<f64>] {
		let start = user * self.items;
		&self.cells[start..start + self.items]
	}

	pub fn rows(&self) -> impl Iterator<Item = &[Option<f64>]> {
		(0..self.users).map(move |user| self.row(user))
	}

	/// Item indices the user has not rated, ascending
	pub fn unrated_items(&self, user: usize) -> Result<Vec<usize>> {
		self.check_user(user)?;
		Ok(self
			.row(user)
			.iter()
			.enumerate()
			.filter(|(_, cell)| cell.is_none())
			.map(|(item, _)| item)
			.collect())
	}

	pub fn rated_count(&self) -> usize {
		self.cells.iter().filter(|c| c.is_some()).count()
	}

	/// Fraction of cells holding a rating
	pub fn density(&self) -> f64 {
		if self.cells.is_empty() {
			0.0
		} else {
			self.rated_count() as f64 / self.cells.len() as f64
		}
	}

	pub fn check_user(&self, user: usize) -> Result<()> {
		if user < self.users {
			Ok(())
		} else {
			Err(Error::InvalidIndex { axis: Axis::User, index: user, bound: self.users })
		}
	}

	pub fn check_item(&self, item: usize) -> Result<()> {
		if item < self.items {
			Ok(())
		} else {
			Err(Error::InvalidIndex { axis: Axis::Item, index: item, bound: self.items })
		}
	}

	/// Copy with one cell cleared, used for leave-one-out evaluation
	pub(crate) fn without(&self, user: usize, item: usize) -> Self {
		let mut masked = self.clone();
		if user < self.users && item < self.items {
			masked.cells[user * self.items + item] = None;
		}
		masked
	}

	/// Internal constructor for derived matrices whose shape is already known
	pub(crate) fn from_parts(users: usize, items: usize, cells: Vec<Option<f64>>) -> Self {
		debug_assert_eq!(cells.len(), users * items);
		Self { users, items, cells }
	}
}
