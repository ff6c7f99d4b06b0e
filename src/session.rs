/*
session.rs

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

//! Manage the status of a game.
//!
//! [`GameSession`] is the only object that the presentation layer talks to. It receives
//! [`GameEvent`] events and returns a [`Snapshot`] of the game after each of them.
//!
//! A game goes through three phases:
//!
//! * [`Phase::Idle`]: the grid is displayed, the clock is stopped. The first gesture starts the
//!   game.
//! * [`Phase::Active`]: the clock is running and the player traces words.
//! * [`Phase::Over`]: the clock expired. Only [`GameEvent::Restart`] is processed.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, IntoStaticStr};

use crate::clock::{ClockState, GameClock};
use crate::config::{ConfigError, GameConfig, LOW_TIME_WARNING_SEC, MIN_WORD_LENGTH};
use crate::dictionary::{Dictionary, DictionaryError};
use crate::error::EngineError;
use crate::grid::{Cell, Grid};
use crate::path_tracker::PathTracker;
use crate::scoring::{CreditResult, ScoringLedger};

/// Session phase.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Over,
}

/// Input events.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, IntoStaticStr)]
#[serde(tag = "event", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameEvent {
    /// The player pressed a cell.
    Begin(Cell),

    /// The player's pointer entered a cell.
    Extend(Cell),

    /// The player released the pointer.
    End,

    /// One second elapsed.
    Tick,

    /// The player asked for a new game.
    Restart,
}

/// How the presentation layer should highlight the word being traced.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WordFeedback {
    /// Not a word, or too short.
    None,

    /// A valid word that the player has not found yet.
    Valid,

    /// A word that the player already found.
    AlreadyFound,
}

/// End-of-game results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub words_found: usize,
    pub score: u32,
    pub words: Vec<String>,
}

/// Read-only view of the game, for rendering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,

    /// Cells of the gesture in progress.
    pub path: Vec<Cell>,

    /// Word spelled by [`Snapshot::path`].
    pub current_word: String,

    /// Found words, in discovery order.
    pub found_words: Vec<String>,

    pub score: u32,

    /// Remaining seconds.
    pub remaining: u32,

    pub phase: Phase,

    /// Result of the last completed gesture in this game.
    pub last_result: Option<CreditResult>,

    /// Game number, starting at 1. Each restart increments it.
    pub round: u32,
}

impl Snapshot {
    /// Whether the current word has already been found.
    pub fn is_already_found(&self) -> bool {
        self.current_word.chars().count() >= MIN_WORD_LENGTH
            && self.found_words.iter().any(|w| *w == self.current_word)
    }

    /// Whether the current word is in the dictionary.
    pub fn is_known_word(&self, dictionary: &Dictionary) -> bool {
        dictionary.contains(&self.current_word)
    }

    /// Return the highlighting for the current word.
    pub fn word_feedback(&self, dictionary: &Dictionary) -> WordFeedback {
        if self.is_already_found() {
            WordFeedback::AlreadyFound
        } else if self.is_known_word(dictionary) {
            WordFeedback::Valid
        } else {
            WordFeedback::None
        }
    }

    /// Whether the player is running out of time.
    pub fn is_time_running_low(&self) -> bool {
        self.phase == Phase::Active && self.remaining <= LOW_TIME_WARNING_SEC
    }

    /// Return the game results.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            words_found: self.found_words.len(),
            score: self.score,
            words: self.found_words.clone(),
        }
    }
}

/// Game in progress.
pub struct GameSession {
    config: GameConfig,

    /// Word list, kept across restarts.
    dictionary: Dictionary,

    /// Grid generator.
    rng: StdRng,

    grid: Grid,
    tracker: PathTracker,
    ledger: ScoringLedger,
    clock: GameClock,
    phase: Phase,
    last_result: Option<CreditResult>,
    round: u32,
}

impl GameSession {
    /// Create a [`GameSession`] object with a random grid.
    ///
    /// # Errors
    ///
    /// The method returns an error if the configuration is not valid.
    pub fn new(config: GameConfig, dictionary: Dictionary) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng: StdRng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let grid: Grid = Grid::generate(config.grid_size, &mut rng);
        Ok(Self::build(config, dictionary, rng, grid))
    }

    /// Create a [`GameSession`] object for the provided grid.
    ///
    /// The grid size replaces the size in the configuration. Restarting the game generates
    /// random grids of the same size.
    ///
    /// # Errors
    ///
    /// The method returns an error if the configuration or the grid is not valid.
    pub fn with_grid(
        mut config: GameConfig,
        dictionary: Dictionary,
        grid: Grid,
    ) -> Result<Self, ConfigError> {
        config.grid_size = grid.size();
        config.validate()?;
        let rng: StdRng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::build(config, dictionary, rng, grid))
    }

    fn build(config: GameConfig, dictionary: Dictionary, rng: StdRng, grid: Grid) -> Self {
        Self {
            clock: GameClock::new(config.duration_sec),
            config,
            dictionary,
            rng,
            grid,
            tracker: PathTracker::new(),
            ledger: ScoringLedger::new(),
            phase: Phase::Idle,
            last_result: None,
            round: 1,
        }
    }

    /// Return the session phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Return the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Provide the result of loading the word list.
    ///
    /// This can happen at any time, even after the game started.
    pub fn resolve_dictionary(&mut self, result: Result<HashSet<String>, DictionaryError>) {
        self.dictionary.resolve(result);
    }

    /// Process an event and return the new state of the game.
    ///
    /// Events that cannot be processed are ignored.
    pub fn apply(&mut self, event: GameEvent) -> Snapshot {
        match self.try_apply(event) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!("Ignoring event: {e}");
                self.snapshot()
            }
        }
    }

    /// Process an event and return the new state of the game.
    ///
    /// # Errors
    ///
    /// The method returns an error, and does not change the game, if the event is not expected
    /// in the current phase or if a cell is outside the grid.
    pub fn try_apply(&mut self, event: GameEvent) -> Result<Snapshot, EngineError> {
        match event {
            GameEvent::Begin(cell) => self.begin(cell)?,
            GameEvent::Extend(cell) => self.extend(cell)?,
            GameEvent::End => self.end()?,
            GameEvent::Tick => self.tick()?,
            GameEvent::Restart => self.restart()?,
        }
        Ok(self.snapshot())
    }

    fn invalid(&self, event: GameEvent) -> EngineError {
        EngineError::InvalidTransition {
            phase: self.phase,
            event: event.into(),
        }
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), EngineError> {
        if self.grid.contains(cell) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                cell,
                size: self.grid.size(),
            })
        }
    }

    /// Start a gesture. The first gesture starts the game.
    pub fn begin(&mut self, cell: Cell) -> Result<(), EngineError> {
        match self.phase {
            Phase::Over => return Err(self.invalid(GameEvent::Begin(cell))),
            Phase::Idle => {
                self.check_bounds(cell)?;
                self.clock.start();
                self.phase = Phase::Active;
                debug!("Game started");
            }
            Phase::Active => self.check_bounds(cell)?,
        }
        let started: bool = self.tracker.begin(&self.grid, cell);
        assert!(started, "Bug: cell {cell} rejected after bounds check");
        Ok(())
    }

    /// Add a cell to the gesture in progress.
    ///
    /// Cells that are not adjacent to the end of the path, or that are already in the path, are
    /// ignored.
    pub fn extend(&mut self, cell: Cell) -> Result<(), EngineError> {
        if self.phase != Phase::Active {
            return Err(self.invalid(GameEvent::Extend(cell)));
        }
        self.check_bounds(cell)?;
        self.tracker.extend(&self.grid, cell);
        Ok(())
    }

    /// Finish the gesture in progress and submit its word.
    pub fn end(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Active {
            return Err(self.invalid(GameEvent::End));
        }
        if let Some(path) = self.tracker.end() {
            let result: CreditResult = self.ledger.try_credit(path.word(), &self.dictionary);
            debug!("Submitted {:?}: {result:?}", path.word());
            self.last_result = Some(result);
        }
        Ok(())
    }

    /// One second elapsed.
    ///
    /// When the clock expires, the gesture in progress is dropped and the game is over.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Active {
            return Err(self.invalid(GameEvent::Tick));
        }
        if self.clock.tick() == ClockState::Expired {
            self.tracker.cancel();
            self.phase = Phase::Over;
            debug!(
                "Game over: {} words, score = {}",
                self.ledger.found_words().len(),
                self.ledger.score()
            );
        }
        Ok(())
    }

    /// Start a new game with a new grid. The dictionary is kept.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        if self.phase == Phase::Idle {
            return Err(self.invalid(GameEvent::Restart));
        }
        self.grid = Grid::generate(self.config.grid_size, &mut self.rng);
        self.tracker = PathTracker::new();
        self.ledger = ScoringLedger::new();
        self.clock = GameClock::new(self.config.duration_sec);
        self.phase = Phase::Idle;
        self.last_result = None;
        self.round += 1;
        debug!("New game, round {}", self.round);
        Ok(())
    }

    /// Return the state of the game.
    pub fn snapshot(&self) -> Snapshot {
        let path = self.tracker.path();
        Snapshot {
            grid: self.grid.clone(),
            path: path.cells().clone(),
            current_word: path.word().to_string(),
            found_words: self.ledger.found_words().clone(),
            score: self.ledger.score(),
            remaining: self.clock.remaining(),
            phase: self.phase,
            last_result: self.last_result,
            round: self.round,
        }
    }

    /// Return the highlighting for the word being traced.
    pub fn word_feedback(&self) -> WordFeedback {
        self.snapshot().word_feedback(&self.dictionary)
    }
}
