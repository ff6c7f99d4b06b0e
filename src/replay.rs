/*
replay.rs

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

//! Replay a recorded list of events.
//!
//! The events are stored in a JSON file as an array of [`GameEvent`] objects:
//!
//! ```json
//! [
//!     {"event": "begin", "row": 0, "col": 0},
//!     {"event": "extend", "row": 0, "col": 1},
//!     {"event": "end"},
//!     {"event": "tick"}
//! ]
//! ```
//!
//! With the same seed (or grid) and the same word list, a replay always produces the same
//! snapshots.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::session::{GameEvent, GameSession, Snapshot};

/// Read the events from a JSON file.
pub fn load_events(path: &Path) -> Result<Vec<GameEvent>, Box<dyn Error>> {
    let reader: BufReader<File> = BufReader::new(File::open(path)?);
    let events: Vec<GameEvent> = serde_json::from_reader(reader)?;
    debug!("Loaded {} events from {path:?}", events.len());
    Ok(events)
}

/// Apply the events in order and return the snapshot that follows each of them.
pub fn run<I>(session: &mut GameSession, events: I) -> Vec<Snapshot>
where
    I: IntoIterator<Item = GameEvent>,
{
    events.into_iter().map(|e| session.apply(e)).collect()
}
