/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordhunt.

Wordhunt is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordhunt is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordhunt. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Letter grid and cell adjacency.
//!
//! A [`Grid`] is a square matrix of uppercase letters. It is never modified once generated: the
//! session builds a new one when the player restarts.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ALPHABET;
use crate::error::EngineError;

/// Cell coordinates in the grid. Rows and columns start at 0.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the two cells touch each other, horizontally, vertically, or diagonally.
    ///
    /// A cell is not adjacent to itself.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Square matrix of letters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Letters, row by row.
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid of `size` rows and columns filled with random letters.
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let rows: Vec<Vec<char>> = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                    .collect()
            })
            .collect();
        let grid = Self { rows };
        debug!("New grid: {grid}");
        grid
    }

    /// Build a grid from a list of rows.
    ///
    /// Letters are converted to uppercase.
    ///
    /// # Panics
    ///
    /// The method panics if the rows do not form a square matrix, or if a cell is not an ASCII
    /// letter.
    pub fn from_rows(rows: &[&str]) -> Self {
        let rows: Vec<Vec<char>> = rows
            .iter()
            .map(|r| r.chars().map(|c| c.to_ascii_uppercase()).collect::<Vec<char>>())
            .collect();
        for row in &rows {
            assert_eq!(row.len(), rows.len(), "Bug: the grid must be square");
            assert!(
                row.iter().all(char::is_ascii_uppercase),
                "Bug: grid cells must be letters"
            );
        }
        Self { rows }
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cell is inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size() && cell.col < self.size()
    }

    /// Whether the two cells are adjacent. See [`Cell::is_adjacent`].
    pub fn adjacent(&self, a: Cell, b: Cell) -> bool {
        a.is_adjacent(&b)
    }

    /// Return the letter of the given cell.
    ///
    /// # Errors
    ///
    /// The method returns [`EngineError::OutOfBounds`] when the cell is outside the grid.
    pub fn letter_at(&self, cell: Cell) -> Result<char, EngineError> {
        self.rows
            .get(cell.row)
            .and_then(|r| r.get(cell.col))
            .copied()
            .ok_or(EngineError::OutOfBounds {
                cell,
                size: self.size(),
            })
    }

    /// Return the rows of letters.
    pub fn rows(&self) -> &Vec<Vec<char>> {
        &self.rows
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lines: Vec<String> = self.rows.iter().map(|r| r.iter().collect()).collect();
        write!(f, "{}", lines.join("/"))
    }
}
