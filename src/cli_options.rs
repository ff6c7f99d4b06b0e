/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Play a 5x5 grid for 90 seconds:
//!
//! ```
//! $ wordhunt --size 5 --duration 90 --words /usr/share/dict/words
//! ```
//!
//! Replay a recorded game and print the final state in JSON format:
//!
//! ```
//! $ wordhunt --seed 42 --replay game.json
//! {
//!   "grid": { "rows": [["Q", "E", ...
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

use wordhunt::config::{COPYRIGHT_NOTICE, GameConfig};
use wordhunt::dictionary::{Dictionary, load_word_list};
use wordhunt::replay;
use wordhunt::session::{GameSession, Snapshot};

/// Find words in a grid of letters before the time runs out.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Word list file, one word per line
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    words: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows and columns in the grid
    #[arg(short, long)]
    size: Option<usize>,

    /// Game duration in seconds
    #[arg(short = 't', long)]
    duration: Option<u32>,

    /// Seed for the grid generator
    #[arg(long)]
    seed: Option<u64>,

    /// Apply the events from the given JSON file and print the final game state
    #[arg(short, long)]
    replay: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parameters for an interactive game.
pub struct Options {
    pub config: GameConfig,
    pub words: PathBuf,
}

/// Parse and process command-line options.
///
/// Return the [`Options`] for starting an interactive game, or the exit code if the options
/// have been fully processed.
pub fn parse() -> Result<Options, u8> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Build the configuration: file first, then command-line overrides
    //
    let mut config: GameConfig = match &args.config {
        Some(path) => match GameConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Cannot read the configuration file {path:?}: {e}");
                return Err(1);
            }
        },
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if let Some(duration) = args.duration {
        config.duration_sec = duration;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return Err(1);
    }
    debug!("Configuration: {config:?}");

    match args.replay {
        Some(path) => Err(replay_file(config, &args.words, &path)),
        None => Ok(Options {
            config,
            words: args.words,
        }),
    }
}

/// Replay the events of the given file and print the final snapshot.
fn replay_file(config: GameConfig, words: &Path, events: &Path) -> u8 {
    let mut dictionary: Dictionary = Dictionary::new();
    dictionary.resolve(load_word_list(words));

    let event_list = match replay::load_events(events) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Cannot read the events from {events:?}: {e}");
            return 1;
        }
    };

    let mut session: GameSession = match GameSession::new(config, dictionary) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return 1;
        }
    };
    let snapshot: Snapshot = match replay::run(&mut session, event_list).pop() {
        Some(s) => s,
        None => session.snapshot(),
    };

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            eprintln!("Cannot serialize the game state: {e}");
            1
        }
    }
}
