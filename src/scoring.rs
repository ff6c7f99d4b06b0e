/*
scoring.rs

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

//! Manage the words that the player found and the score.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::{MIN_WORD_LENGTH, POINTS_PER_WORD};
use crate::dictionary::Dictionary;

/// Outcome of submitting a word.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CreditResult {
    /// New word. The score increased by the given number of points.
    Credited(u32),

    /// The player already found that word during this game.
    AlreadyFound,

    /// The word is not in the dictionary, or is too short.
    NotAWord,
}

/// Found words and score for one game.
#[derive(Debug, Default, Clone)]
pub struct ScoringLedger {
    /// Found words, in the order the player found them.
    found: Vec<String>,

    /// Same words as [`ScoringLedger::found`], for fast lookup.
    found_set: HashSet<String>,

    /// Cumulative score.
    score: u32,
}

impl ScoringLedger {
    /// Create a [`ScoringLedger`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Return the found words, in the order the player found them.
    pub fn found_words(&self) -> &Vec<String> {
        &self.found
    }

    /// Whether the player already found the word. The comparison is case-insensitive.
    pub fn is_found(&self, word: &str) -> bool {
        self.found_set.contains(&word.to_uppercase())
    }

    /// Credit the word if it is valid and new.
    pub fn try_credit(&mut self, word: &str, dictionary: &Dictionary) -> CreditResult {
        let word: String = word.to_uppercase();

        // Do not rely on the dictionary only for rejecting short words
        if word.chars().count() < MIN_WORD_LENGTH || !dictionary.contains(&word) {
            debug!("{word:?} is not a word");
            return CreditResult::NotAWord;
        }
        if self.found_set.contains(&word) {
            debug!("{word:?} already found");
            return CreditResult::AlreadyFound;
        }

        self.score += POINTS_PER_WORD;
        debug!("{word:?} credited: score = {}", self.score);
        self.found_set.insert(word.clone());
        self.found.push(word);
        CreditResult::Credited(POINTS_PER_WORD)
    }
}
