/*
lib.rs

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

//! Wordhunt game engine.
//!
//! The player drags across adjacent cells of a letter grid to spell words, and scores points for
//! each new valid word before the countdown expires.
//!
//! The engine does not draw anything and does not run timers. The presentation layer sends
//! [`session::GameEvent`] events to a [`session::GameSession`] object and renders the returned
//! [`session::Snapshot`]:
//!
//! * [`grid`]: the letter grid and the adjacency rule.
//! * [`dictionary`]: the word list, which can be provided after the game started.
//! * [`path_tracker`]: converts a gesture into a path and a word.
//! * [`scoring`]: found words and score.
//! * [`clock`]: the countdown.
//! * [`session`]: the phase state machine that ties everything together.
//! * [`replay`]: applies a recorded list of events.

pub mod clock;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod grid;
pub mod path_tracker;
pub mod replay;
pub mod scoring;
pub mod session;
