/*
path_tracker.rs

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

//! Track the cells that the player selects during a gesture.
//!
//! A gesture starts with [`PathTracker::begin`], continues with any number of
//! [`PathTracker::extend`], and finishes with [`PathTracker::end`].
//! The tracker only accepts cells that are adjacent to the last selected cell and that are not
//! already in the path. Other cells are silently ignored: sliding over a wrong cell is normal
//! gameplay.

use log::debug;
use std::collections::HashSet;

use crate::grid::{Cell, Grid};

/// Ordered list of distinct, adjacent cells.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    cells: Vec<Cell>,

    /// Stores the visited status of the cells, to avoid scanning [`Path::cells`].
    visited: HashSet<Cell>,

    /// Letters of the cells, in path order.
    word: String,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Path {
    /// Add a cell to the path.
    ///
    /// # Panics
    ///
    /// The method panics if the cell is already in the path. Callers must verify with
    /// [`Path::contains`] first.
    fn push(&mut self, cell: Cell, letter: char) {
        assert!(
            self.visited.insert(cell),
            "Bug: cell {cell} is already in the path"
        );
        self.cells.push(cell);
        self.word.push(letter);
    }

    /// Remove all the cells from the path.
    fn clear(&mut self) {
        self.cells.clear();
        self.visited.clear();
        self.word.clear();
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path has no cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Return the cells, in selection order.
    pub fn cells(&self) -> &Vec<Cell> {
        &self.cells
    }

    /// Return the word that the path spells.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

/// Gesture state machine.
#[derive(Debug, Default, Clone)]
pub struct PathTracker {
    /// Path in progress. Empty when no gesture is active.
    path: Path,

    /// Whether a gesture is in progress.
    tracking: bool,
}

impl PathTracker {
    /// Create a [`PathTracker`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Return the path in progress.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the word spelled by the path in progress.
    pub fn current_word(&self) -> &str {
        self.path.word()
    }

    /// Start a new gesture from the given cell.
    ///
    /// A gesture already in progress is discarded.
    /// Return false, and do nothing, if the cell is outside the grid.
    pub fn begin(&mut self, grid: &Grid, cell: Cell) -> bool {
        let Ok(letter) = grid.letter_at(cell) else {
            debug!("Ignoring gesture start outside the grid at {cell}");
            return false;
        };
        if self.tracking && !self.path.is_empty() {
            debug!("Discarding unfinished path {:?}", self.path.word());
        }
        self.path.clear();
        self.path.push(cell, letter);
        self.tracking = true;
        true
    }

    /// Add a cell to the gesture in progress.
    ///
    /// Return whether the cell was added. The cell is rejected when no gesture is active, when
    /// it is outside the grid, when it is already in the path, or when it is not adjacent to the
    /// last cell.
    pub fn extend(&mut self, grid: &Grid, cell: Cell) -> bool {
        if !self.tracking {
            return false;
        }
        if self.path.contains(cell) {
            debug!("Cell {cell} already in the path");
            return false;
        }
        match self.path.get_last() {
            Some(last) if grid.adjacent(last, cell) => (),
            _ => {
                debug!("Cell {cell} is not adjacent to the end of the path");
                return false;
            }
        }
        let Ok(letter) = grid.letter_at(cell) else {
            debug!("Cell {cell} is outside the grid");
            return false;
        };
        self.path.push(cell, letter);
        true
    }

    /// Finish the gesture and return the path, or None if no gesture was active.
    pub fn end(&mut self) -> Option<Path> {
        if !self.tracking {
            return None;
        }
        self.tracking = false;
        Some(std::mem::take(&mut self.path))
    }

    /// Abandon the gesture in progress, if any.
    pub fn cancel(&mut self) {
        self.tracking = false;
        self.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grid() -> Grid {
        Grid::from_rows(&["ABCD", "EFGH", "IJKL", "MNOP"])
    }

    fn assert_valid(path: &Path) {
        let cells = path.cells();
        for (i, c) in cells.iter().enumerate() {
            assert!(!cells[i + 1..].contains(c), "{c} appears twice");
        }
        for pair in cells.windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }
    }

    #[test]
    fn builds_word_from_adjacent_cells() {
        let grid = grid();
        let mut tracker = PathTracker::new();

        assert!(tracker.begin(&grid, Cell::new(0, 0)));
        assert!(tracker.extend(&grid, Cell::new(1, 1)));
        assert!(tracker.extend(&grid, Cell::new(1, 2)));
        assert_eq!(tracker.current_word(), "AFG");

        let path = tracker.end().unwrap();
        assert_eq!(path.word(), "AFG");
        assert_eq!(path.len(), 3);
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.current_word(), "");
    }

    #[test]
    fn rejects_revisited_and_distant_cells() {
        let grid = grid();
        let mut tracker = PathTracker::new();

        tracker.begin(&grid, Cell::new(1, 1));
        assert!(tracker.extend(&grid, Cell::new(1, 2)));
        // Back to the first cell
        assert!(!tracker.extend(&grid, Cell::new(1, 1)));
        // Same cell again
        assert!(!tracker.extend(&grid, Cell::new(1, 2)));
        // Two columns away
        assert!(!tracker.extend(&grid, Cell::new(1, 0)));
        // Outside the grid
        assert!(!tracker.extend(&grid, Cell::new(1, 4)));
        assert!(tracker.extend(&grid, Cell::new(2, 3)));

        let path = tracker.end().unwrap();
        assert_eq!(path.word(), "FGL");
        assert_valid(&path);
    }

    #[test]
    fn seeded_walks_keep_invariants() {
        let grid = grid();
        let mut rng = StdRng::seed_from_u64(17);

        for start_row in 0..4 {
            for start_col in 0..4 {
                let mut tracker = PathTracker::new();
                tracker.begin(&grid, Cell::new(start_row, start_col));
                // Cells one step outside the grid are drawn too
                for _ in 0..40 {
                    let cell = Cell::new(rng.random_range(0..5), rng.random_range(0..5));
                    tracker.extend(&grid, cell);
                }
                let path = tracker.end().unwrap();
                assert_eq!(path.cells()[0], Cell::new(start_row, start_col));
                assert_eq!(path.word().len(), path.len());
                assert_valid(&path);
            }
        }
    }

    #[test]
    fn begin_discards_previous_gesture() {
        let grid = grid();
        let mut tracker = PathTracker::new();

        tracker.begin(&grid, Cell::new(0, 0));
        tracker.extend(&grid, Cell::new(0, 1));
        tracker.begin(&grid, Cell::new(3, 3));
        assert_eq!(tracker.current_word(), "P");
        assert_eq!(tracker.path().cells(), &vec![Cell::new(3, 3)]);
    }

    #[test]
    fn single_cell_gesture() {
        let grid = grid();
        let mut tracker = PathTracker::new();
        tracker.begin(&grid, Cell::new(3, 0));
        let path = tracker.end().unwrap();
        assert_eq!(path.word(), "M");
    }

    #[test]
    fn events_without_gesture_are_ignored() {
        let grid = grid();
        let mut tracker = PathTracker::new();

        assert!(!tracker.extend(&grid, Cell::new(0, 0)));
        assert!(tracker.end().is_none());
        assert!(!tracker.begin(&grid, Cell::new(4, 0)));
        assert!(!tracker.is_tracking());
    }
}
