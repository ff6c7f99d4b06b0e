/*
clock.rs

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

//! Game countdown.
//!
//! The clock does not measure time by itself: an external timer calls [`GameClock::tick`] once
//! per second.

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Clock status.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum ClockState {
    #[default]
    Stopped,
    Running,
    Expired,
}

/// Countdown in whole seconds.
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Configured duration.
    duration: u32,

    /// Remaining seconds.
    remaining: u32,

    state: ClockState,
}

impl GameClock {
    /// Create a stopped [`GameClock`] object.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            state: ClockState::Stopped,
        }
    }

    /// Return the clock status.
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Return the remaining seconds.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Return the configured duration.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Start the countdown. Only a stopped clock can be started.
    ///
    /// Return whether the clock started.
    pub fn start(&mut self) -> bool {
        if self.state != ClockState::Stopped {
            return false;
        }
        self.remaining = self.duration;
        self.state = ClockState::Running;
        debug!("Clock started: {}s", self.remaining);
        true
    }

    /// Remove one second from a running clock.
    ///
    /// Return the clock status after the tick. The clock expires when it reaches zero.
    pub fn tick(&mut self) -> ClockState {
        if self.state != ClockState::Running {
            return self.state;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            debug!("Clock expired");
            self.state = ClockState::Expired;
        }
        self.state
    }

    /// Stop the clock and restore the full duration.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.state = ClockState::Stopped;
    }
}
