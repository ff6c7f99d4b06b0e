/*
console.rs

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

//! Play in a terminal.
//!
//! Each input line is a gesture: a list of `row,col` cells separated by spaces, such as
//! `0,0 0,1 1,2`. The line is translated into one `begin`, several `extend`, and one `end`
//! events.
//!
//! Three worker threads feed the same channel, which the main loop drains. This way, the game
//! session is only modified from one place:
//!
//! * the word list loader, which sends the dictionary once,
//! * the ticker, which sends a tick every second,
//! * the keyboard reader.

use log::debug;
use std::collections::HashSet;
use std::io::{self, BufRead};
use std::str::FromStr;
use std::thread;
use std::time::Duration;
use strum_macros::EnumString;

use async_channel::{Receiver, Sender};

use crate::cli_options::Options;
use wordhunt::dictionary::{Dictionary, DictionaryError, load_word_list};
use wordhunt::grid::Cell;
use wordhunt::scoring::CreditResult;
use wordhunt::session::{GameEvent, GameSession, Phase, Snapshot, WordFeedback};

/// Commands that the player can type instead of a gesture.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    Restart,
    Help,
    #[strum(serialize = "quit", serialize = "q")]
    Quit,
}

/// Messages processed by the main loop.
enum Message {
    /// Result of loading the word list.
    Dictionary(Result<HashSet<String>, DictionaryError>),

    /// Game event.
    Event(GameEvent),

    /// Command typed by the player.
    Command(Command),

    /// The input line cannot be understood.
    Invalid(String),

    /// The standard input is closed.
    InputClosed,
}

/// Parse a gesture line into a list of cells.
pub fn parse_gesture(line: &str) -> Result<Vec<Cell>, String> {
    let cells: Vec<Cell> = line
        .split_whitespace()
        .map(|token| {
            let (row, col) = token
                .split_once(',')
                .ok_or_else(|| format!("`{token}` is not a `row,col` cell"))?;
            let row: usize = row
                .trim()
                .parse()
                .map_err(|_| format!("`{row}` is not a row number"))?;
            let col: usize = col
                .trim()
                .parse()
                .map_err(|_| format!("`{col}` is not a column number"))?;
            Ok(Cell::new(row, col))
        })
        .collect::<Result<Vec<Cell>, String>>()?;
    if cells.is_empty() {
        return Err("empty gesture".to_string());
    }
    Ok(cells)
}

/// Translate an input line into messages.
fn parse_line(line: &str) -> Vec<Message> {
    let line: &str = line.trim();
    if let Ok(command) = Command::from_str(line) {
        return vec![Message::Command(command)];
    }
    match parse_gesture(line) {
        Ok(cells) => {
            let mut messages: Vec<Message> = Vec::with_capacity(cells.len() + 1);
            messages.push(Message::Event(GameEvent::Begin(cells[0])));
            messages.extend(cells[1..].iter().map(|c| Message::Event(GameEvent::Extend(*c))));
            messages.push(Message::Event(GameEvent::End));
            messages
        }
        Err(e) => vec![Message::Invalid(e)],
    }
}

fn spawn_loader(options: &Options, sender: Sender<Message>) {
    let words = options.words.clone();
    thread::spawn(move || {
        let result = load_word_list(&words);
        let _ = sender.send_blocking(Message::Dictionary(result));
    });
}

fn spawn_ticker(sender: Sender<Message>) {
    thread::spawn(move || {
        loop {
            thread::sleep(Duration::from_secs(1));
            if sender.send_blocking(Message::Event(GameEvent::Tick)).is_err() {
                break;
            }
        }
    });
}

fn spawn_reader(sender: Sender<Message>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            for message in parse_line(&line) {
                if sender.send_blocking(message).is_err() {
                    return;
                }
            }
        }
        let _ = sender.send_blocking(Message::InputClosed);
    });
}

fn print_help() {
    println!("Trace a word by typing its cells as `row,col` separated by spaces, e.g. `0,0 0,1 1,1`.");
    println!("Commands: restart, help, quit.");
}

fn print_grid(snapshot: &Snapshot) {
    let header: String = (0..snapshot.grid.size()).map(|c| format!(" {c}")).collect();
    println!("  {header}");
    for (r, row) in snapshot.grid.rows().iter().enumerate() {
        let letters: String = row.iter().map(|l| format!(" {l}")).collect();
        println!("{r:>2}{letters}");
    }
}

fn print_status(snapshot: &Snapshot) {
    let warning: &str = if snapshot.is_time_running_low() { "!" } else { "" };
    println!(
        "Time left: {}s{warning}  Score: {}  Words: {}",
        snapshot.remaining,
        snapshot.score,
        snapshot.found_words.len()
    );
}

fn print_summary(snapshot: &Snapshot) {
    let summary = snapshot.summary();
    println!("Time's up!");
    println!("You found {} words!", summary.words_found);
    println!("Final score: {}", summary.score);
    for word in &summary.words {
        println!("  {word}");
    }
    println!("Type `restart` to play again.");
}

fn print_result(word: &str, feedback: WordFeedback, snapshot: &Snapshot) {
    match snapshot.last_result {
        Some(CreditResult::Credited(points)) => println!("{word}: +{points}"),
        Some(CreditResult::AlreadyFound) => println!("{word}: already found"),
        Some(CreditResult::NotAWord) => println!("{word}: not a word"),
        None => (),
    }
    debug!("Feedback for {word}: {feedback:?}");
    print_status(snapshot);
}

/// Return the word and feedback of the gesture in progress, or None if no gesture started.
fn traced_word(snapshot: &Snapshot, dictionary: &Dictionary) -> Option<(String, WordFeedback)> {
    if snapshot.path.is_empty() {
        return None;
    }
    Some((snapshot.current_word.clone(), snapshot.word_feedback(dictionary)))
}

/// Run an interactive game and return the exit code.
pub fn run(options: Options) -> u8 {
    let mut session: GameSession = match GameSession::new(options.config, Dictionary::new()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return 1;
        }
    };

    let (sender, receiver): (Sender<Message>, Receiver<Message>) = async_channel::unbounded();
    spawn_loader(&options, sender.clone());
    spawn_ticker(sender.clone());
    spawn_reader(sender);

    print_help();
    let mut snapshot: Snapshot = session.snapshot();
    print_grid(&snapshot);
    println!("Trace a word to start the clock.");

    // Word and feedback of the gesture in progress, kept for reporting after the gesture ends
    let mut traced: Option<(String, WordFeedback)> = None;

    while let Ok(message) = receiver.recv_blocking() {
        match message {
            Message::Dictionary(result) => {
                if let Err(e) = &result {
                    eprintln!("{e}: no word will be accepted");
                }
                session.resolve_dictionary(result);
            }
            Message::Invalid(e) => println!("Invalid input: {e}"),
            Message::InputClosed | Message::Command(Command::Quit) => break,
            Message::Command(Command::Help) => print_help(),
            Message::Command(Command::Restart) => match session.try_apply(GameEvent::Restart) {
                Ok(s) => {
                    snapshot = s;
                    traced = None;
                    print_grid(&snapshot);
                    println!("Round {}. Trace a word to start the clock.", snapshot.round);
                }
                Err(_) => println!("The game has not started yet: nothing to restart."),
            },
            Message::Event(event) => {
                let previous: Phase = snapshot.phase;
                snapshot = session.apply(event);

                match event {
                    GameEvent::Begin(_) => {
                        traced = traced_word(&snapshot, session.dictionary());
                        if traced.is_none() && snapshot.phase != Phase::Over {
                            println!("Invalid input: cell outside the grid");
                        }
                    }
                    GameEvent::Extend(_) if traced.is_some() => {
                        traced = traced_word(&snapshot, session.dictionary());
                    }
                    GameEvent::End if snapshot.phase == Phase::Active => {
                        // Nothing to report when the gesture never started
                        if let Some((word, feedback)) = traced.take() {
                            print_result(&word, feedback, &snapshot);
                        }
                    }
                    GameEvent::Tick if snapshot.phase == Phase::Active => {
                        if snapshot.remaining % 10 == 0 || snapshot.remaining <= 5 {
                            print_status(&snapshot);
                        }
                    }
                    _ => (),
                }

                if previous == Phase::Active && snapshot.phase == Phase::Over {
                    print_summary(&snapshot);
                } else if previous == Phase::Over && event == GameEvent::End {
                    println!("The game is over. Type `restart` to play again.");
                }
            }
        }
    }
    0
}
