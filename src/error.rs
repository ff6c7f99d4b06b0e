/*
error.rs

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

//! Errors raised by the game engine.
//!
//! None of these errors can be caused by valid player input. [`EngineError::InvalidTransition`]
//! is reported by [`crate::session::GameSession::try_apply`] only, and is otherwise silently
//! ignored because gestures naturally arrive a bit early or late around phase changes.

use std::error::Error;
use std::fmt;

use crate::grid::Cell;
use crate::session::Phase;

/// Type of engine errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The cell coordinates are outside the grid.
    OutOfBounds { cell: Cell, size: usize },

    /// The event cannot be processed in the current phase.
    InvalidTransition { phase: Phase, event: &'static str },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::OutOfBounds { cell, size } => {
                write!(f, "cell {cell} is outside the {size}x{size} grid")
            }
            EngineError::InvalidTransition { phase, event } => {
                write!(f, "event `{event}` cannot be processed in the {phase} phase")
            }
        }
    }
}

impl Error for EngineError {}
