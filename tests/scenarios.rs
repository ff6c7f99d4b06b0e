/*
scenarios.rs

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

//! Full games played through the public API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

use wordhunt::config::GameConfig;
use wordhunt::dictionary::{Dictionary, DictionaryError};
use wordhunt::grid::{Cell, Grid};
use wordhunt::scoring::CreditResult;
use wordhunt::session::{GameEvent, GameSession, Phase, Snapshot};

fn abcd_session(words: &[&str]) -> GameSession {
    let mut dictionary = Dictionary::new();
    dictionary.resolve(Ok(words.iter().map(|w| w.to_string()).collect()));
    GameSession::with_grid(GameConfig::default(), dictionary, Grid::from_rows(&["AB", "CD"]))
        .unwrap()
}

fn gesture(session: &mut GameSession, cells: &[(usize, usize)]) -> (String, Snapshot) {
    let mut snapshot = session.apply(GameEvent::Begin(cells[0].into()));
    for c in &cells[1..] {
        snapshot = session.apply(GameEvent::Extend((*c).into()));
    }
    let word = snapshot.current_word.clone();
    (word, session.apply(GameEvent::End))
}

#[test]
fn two_letter_word_is_never_credited() {
    let mut session = abcd_session(&["AB"]);

    let (word, snapshot) = gesture(&mut session, &[(0, 0), (0, 1)]);
    assert_eq!(word, "AB");
    assert_eq!(snapshot.last_result, Some(CreditResult::NotAWord));
    assert_eq!(snapshot.score, 0);
    assert!(snapshot.found_words.is_empty());
}

#[test]
fn valid_word_is_credited_once() {
    let mut session = abcd_session(&["ABD"]);

    let (word, snapshot) = gesture(&mut session, &[(0, 0), (0, 1), (1, 1)]);
    assert_eq!(word, "ABD");
    assert_eq!(snapshot.last_result, Some(CreditResult::Credited(10)));
    assert_eq!(snapshot.score, 10);
    assert_eq!(snapshot.found_words, vec!["ABD"]);

    let (_, snapshot) = gesture(&mut session, &[(0, 0), (0, 1), (1, 1)]);
    assert_eq!(snapshot.last_result, Some(CreditResult::AlreadyFound));
    assert_eq!(snapshot.score, 10);
}

#[test]
fn diagonal_cells_are_adjacent() {
    let mut session = abcd_session(&["ABD"]);

    let (word, snapshot) = gesture(&mut session, &[(0, 0), (1, 1)]);
    assert_eq!(word, "AD");
    assert_eq!(snapshot.last_result, Some(CreditResult::NotAWord));
    assert_eq!(snapshot.score, 0);
}

#[test]
fn revisiting_a_cell_is_ignored() {
    let mut session = abcd_session(&["ABD"]);

    let (word, _) = gesture(&mut session, &[(0, 0), (0, 1), (0, 0), (1, 1)]);
    assert_eq!(word, "ABD");
}

#[test]
fn expiry_discards_the_gesture_in_progress() {
    let config = GameConfig {
        duration_sec: 3,
        ..GameConfig::default()
    };
    let mut session = GameSession::with_grid(
        config,
        Dictionary::from_words(["ABD"]),
        Grid::from_rows(&["AB", "CD"]),
    )
    .unwrap();

    session.apply(GameEvent::Begin(Cell::new(0, 0)));
    session.apply(GameEvent::Extend(Cell::new(0, 1)));
    session.apply(GameEvent::Tick);
    session.apply(GameEvent::Tick);
    let snapshot = session.apply(GameEvent::Tick);
    assert_eq!(snapshot.phase, Phase::Over);
    assert!(snapshot.path.is_empty());
    assert_eq!(snapshot.current_word, "");

    // Too late
    assert!(session.try_apply(GameEvent::Extend(Cell::new(1, 1))).is_err());
    assert!(session.try_apply(GameEvent::End).is_err());
    let snapshot = session.apply(GameEvent::End);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.last_result, None);
}

#[test]
fn restart_after_game_over() {
    let config = GameConfig {
        duration_sec: 1,
        seed: Some(5),
        ..GameConfig::default()
    };
    let mut session = GameSession::with_grid(
        config,
        Dictionary::from_words(["ABD"]),
        Grid::from_rows(&["AB", "CD"]),
    )
    .unwrap();

    gesture(&mut session, &[(0, 0), (0, 1), (1, 1)]);
    let snapshot = session.apply(GameEvent::Tick);
    assert_eq!(snapshot.phase, Phase::Over);
    assert_eq!(snapshot.score, 10);

    let snapshot = session.apply(GameEvent::Restart);
    assert_eq!(snapshot.phase, Phase::Idle);
    assert_eq!(snapshot.score, 0);
    assert!(snapshot.found_words.is_empty());
    assert_eq!(snapshot.remaining, 1);
    assert_eq!(snapshot.round, 2);
    assert_eq!(snapshot.grid.size(), 2);
}

#[test]
fn failed_dictionary_accepts_nothing() {
    let mut session = GameSession::with_grid(
        GameConfig::default(),
        Dictionary::new(),
        Grid::from_rows(&["AB", "CD"]),
    )
    .unwrap();
    session.resolve_dictionary(Err(DictionaryError::Empty));
    session.resolve_dictionary(Ok(HashSet::from(["ABD".to_string()])));

    let (_, snapshot) = gesture(&mut session, &[(0, 0), (0, 1), (1, 1)]);
    assert_eq!(snapshot.last_result, Some(CreditResult::NotAWord));
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut session = abcd_session(&["ABD"]);
    session.apply(GameEvent::Begin(Cell::new(1, 0)));
    let snapshot = session.apply(GameEvent::Extend(Cell::new(0, 1)));

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
    assert_eq!(back.current_word, "CB");
}

#[test]
fn restart_generates_a_new_grid() {
    let config = GameConfig {
        duration_sec: 1,
        seed: Some(11),
        ..GameConfig::default()
    };
    let mut session = GameSession::with_grid(
        config,
        Dictionary::from_words(["ABD"]),
        Grid::from_rows(&["AB", "CD"]),
    )
    .unwrap();
    session.apply(GameEvent::Begin(Cell::new(0, 0)));

    // The provided grid does not consume the generator, so the first new grid is the seed's first
    let snapshot = session.apply(GameEvent::Restart);
    let mut rng = StdRng::seed_from_u64(11);
    let expected = Grid::generate(2, &mut rng);
    assert_eq!(snapshot.grid, expected);

    session.apply(GameEvent::Begin(Cell::new(0, 0)));
    let snapshot = session.apply(GameEvent::Restart);
    assert_eq!(snapshot.grid, Grid::generate(2, &mut rng));
    assert_eq!(snapshot.round, 3);
}
