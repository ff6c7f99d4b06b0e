/*
dictionary.rs

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

//! Word list lookup.
//!
//! The word list is loaded asynchronously by the caller, so a [`Dictionary`] starts in the
//! [`DictionaryState::Pending`] state and answers `false` to every lookup until the list is
//! provided with [`Dictionary::resolve`].
//! If loading fails, the dictionary stays empty for the rest of the session.
//!
//! The file format is one word per line. See [`parse_word_list`].

use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::MIN_WORD_LENGTH;

/// Type of errors when loading a word list.
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list cannot be read.
    Io(io::Error),

    /// The word list does not contain any usable word.
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DictionaryError::Io(e) => write!(f, "cannot read the word list: {e}"),
            DictionaryError::Empty => write!(f, "the word list is empty"),
        }
    }
}

impl Error for DictionaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DictionaryError::Io(e) => Some(e),
            DictionaryError::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        DictionaryError::Io(e)
    }
}

/// Loading status of the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryState {
    /// The word list has not been received yet.
    Pending,

    /// The word list is available.
    Loaded(HashSet<String>),

    /// The word list could not be loaded. The dictionary stays empty.
    Failed,
}

/// Set of valid words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    state: DictionaryState,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create a [`Dictionary`] object waiting for its word list.
    pub fn new() -> Self {
        Self {
            state: DictionaryState::Pending,
        }
    }

    /// Create a [`Dictionary`] object from a list of words.
    ///
    /// Words are normalized the same way as in a word list file.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            state: DictionaryState::Loaded(
                words.into_iter().filter_map(|w| normalize(w.as_ref())).collect(),
            ),
        }
    }

    /// Provide the result of loading the word list.
    ///
    /// Only the first result is taken into account: a dictionary that is already loaded or that
    /// failed to load is not changed.
    pub fn resolve(&mut self, result: Result<HashSet<String>, DictionaryError>) {
        if self.state != DictionaryState::Pending {
            debug!("Dictionary already resolved, ignoring the new word list");
            return;
        }
        match result {
            Ok(words) => {
                debug!("Dictionary loaded: {} words", words.len());
                self.state = DictionaryState::Loaded(words);
            }
            Err(e) => {
                warn!("Word list unavailable, no word will be accepted: {e}");
                self.state = DictionaryState::Failed;
            }
        }
    }

    /// Return the loading status.
    pub fn state(&self) -> &DictionaryState {
        &self.state
    }

    /// Whether the word list has been received.
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, DictionaryState::Loaded(_))
    }

    /// Return the number of words.
    pub fn len(&self) -> usize {
        match &self.state {
            DictionaryState::Loaded(words) => words.len(),
            _ => 0,
        }
    }

    /// Whether the dictionary has no word.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the word is valid.
    ///
    /// The lookup is case-insensitive. Words shorter than [`MIN_WORD_LENGTH`] are never valid.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().count() < MIN_WORD_LENGTH {
            return false;
        }
        match &self.state {
            DictionaryState::Loaded(words) => words.contains(&word.to_uppercase()),
            _ => false,
        }
    }
}

/// Normalize a line of the word list, or return None if the word cannot be used.
fn normalize(line: &str) -> Option<String> {
    let word: &str = line.trim();
    if word.len() < MIN_WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}

/// Read a word list: one word per line.
///
/// Lines are trimmed and converted to uppercase. Lines that are too short or that contain
/// something else than ASCII letters are skipped.
pub fn parse_word_list<R: BufRead>(reader: R) -> Result<HashSet<String>, DictionaryError> {
    let mut words: HashSet<String> = HashSet::new();
    for line in reader.lines() {
        if let Some(w) = normalize(&line?) {
            words.insert(w);
        }
    }
    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }
    Ok(words)
}

/// Read the word list from the given file.
pub fn load_word_list(path: &Path) -> Result<HashSet<String>, DictionaryError> {
    debug!("Loading word list from {path:?}");
    let file: File = File::open(path)?;
    parse_word_list(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn pending_dictionary_accepts_nothing() {
        let dictionary = Dictionary::new();
        assert!(!dictionary.is_loaded());
        assert!(!dictionary.contains("CAT"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dictionary = Dictionary::from_words(["cat", "Dog"]);
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("dOG"));
        assert!(!dictionary.contains("COW"));
    }

    #[test]
    fn short_words_are_never_valid() {
        let mut dictionary = Dictionary::new();
        let mut words = HashSet::new();
        words.insert("AB".to_string());
        dictionary.resolve(Ok(words));

        assert!(dictionary.is_loaded());
        assert!(!dictionary.contains("AB"));
    }

    #[test]
    fn failed_load_stays_empty() {
        let mut dictionary = Dictionary::new();
        dictionary.resolve(Err(DictionaryError::Empty));
        assert_eq!(dictionary.state(), &DictionaryState::Failed);

        // A late word list does not replace the failure
        dictionary.resolve(Ok(HashSet::from(["CAT".to_string()])));
        assert_eq!(dictionary.state(), &DictionaryState::Failed);
        assert!(!dictionary.contains("CAT"));
    }

    #[test]
    fn parse_skips_unusable_lines() {
        let input = "cat\n  dog \r\nab\nit's\n\nmouse\n";
        let words = parse_word_list(Cursor::new(input)).unwrap();

        assert_eq!(words.len(), 3);
        assert!(words.contains("CAT"));
        assert!(words.contains("DOG"));
        assert!(words.contains("MOUSE"));
    }

    #[test]
    fn parse_rejects_empty_list() {
        let ret = parse_word_list(Cursor::new("a\nbe\n"));
        assert!(matches!(ret, Err(DictionaryError::Empty)));
    }

    #[test]
    fn load_missing_file() {
        let ret = load_word_list(Path::new("/nonexistent/wordhunt/words.txt"));
        assert!(matches!(ret, Err(DictionaryError::Io(_))));
    }
}
