/*
config.rs

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

//! Game constants and session configuration.
//!
//! The [`GameConfig`] object groups the parameters that a [`crate::session::GameSession`] needs
//! at creation time. It can be read from a JSON file and then overridden by command-line options.

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const PKGNAME: &str = "wordhunt";
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Default number of rows and columns in the letter grid.
pub const GRID_SIZE: usize = 4;

/// Default game duration in seconds.
pub const GAME_DURATION_SEC: u32 = 60;

/// Points awarded for each newly found word.
pub const POINTS_PER_WORD: u32 = 10;

/// Words shorter than this are never valid.
pub const MIN_WORD_LENGTH: usize = 3;

/// Below (or at) this number of remaining seconds, the presentation layer should warn the player.
pub const LOW_TIME_WARNING_SEC: u32 = 10;

/// Letters used to fill the grid.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Type of configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// The grid must have at least one row and one column.
    ZeroGridSize,

    /// A game must last at least one second.
    ZeroDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ZeroGridSize => write!(f, "the grid size must be at least 1"),
            ConfigError::ZeroDuration => write!(f, "the game duration must be at least 1 second"),
        }
    }
}

impl Error for ConfigError {}

/// Session parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows (and columns) of the grid.
    pub grid_size: usize,

    /// Countdown duration in seconds.
    pub duration_sec: u32,

    /// Seed for the grid generator. When not set, the grids are seeded from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            duration_sec: GAME_DURATION_SEC,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read a [`GameConfig`] object from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Configuration file: {path:?}");
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let config: GameConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Verify that the parameters can be used to play a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.duration_sec == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_config_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 4);
        assert_eq!(config.duration_sec, 60);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_values_are_rejected() {
        let mut config = GameConfig {
            grid_size: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroGridSize)));
        config.grid_size = 5;
        config.duration_sec = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroDuration)));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("wordhunt-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "grid_size": 5, "seed": 7 }"#).unwrap();

        let config = GameConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.grid_size, 5);
        assert_eq!(config.duration_sec, GAME_DURATION_SEC);
        assert_eq!(config.seed, Some(7));
    }
}
