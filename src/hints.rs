// Wordstrand – A spangram word-search puzzle maker
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::{BTreeSet, HashSet};
use super::selection::Judgement;

pub const MIN_HINT_WORD_LENGTH: usize = 4;
pub const WORDS_PER_HINT: usize = 3;

/// Anything that can say whether a word is real
pub trait WordList {
    fn contains(&self, word: &str) -> bool;
}

impl WordList for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl WordList for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintEvent {
    /// The word was counted towards the next hint
    Counted,
    /// The word was counted and completed a hint
    Earned,
    /// Too short, not a word, or already found
    Ignored,
}

/// Keeps track of which words the player has found and how many hints
/// they have earned by finding words that aren’t part of the puzzle.
#[derive(Clone, Debug)]
pub struct HintTracker {
    found_theme_words: Vec<bool>,
    // Theme words that a hint has already pointed at
    revealed_theme_words: Vec<bool>,
    found_spangram: bool,
    other_words: HashSet<String>,
    hints_earned: usize,
    hints_used: usize,
}

impl HintTracker {
    pub fn new(n_theme_words: usize) -> HintTracker {
        HintTracker {
            found_theme_words: vec![false; n_theme_words],
            revealed_theme_words: vec![false; n_theme_words],
            found_spangram: false,
            other_words: HashSet::new(),
            hints_earned: 0,
            hints_used: 0,
        }
    }

    pub fn record<W: WordList + ?Sized>(
        &mut self,
        judgement: &Judgement,
        dictionary: &W,
    ) -> HintEvent {
        match judgement {
            Judgement::Spangram => {
                self.found_spangram = true;
                HintEvent::Ignored
            },
            Judgement::ThemeWord(index) => {
                if let Some(found) = self.found_theme_words.get_mut(*index) {
                    *found = true;
                }
                HintEvent::Ignored
            },
            Judgement::Other(word) => self.record_other_word(word, dictionary),
        }
    }

    fn record_other_word<W: WordList + ?Sized>(
        &mut self,
        word: &str,
        dictionary: &W,
    ) -> HintEvent {
        if word.chars().count() < MIN_HINT_WORD_LENGTH
            || self.other_words.contains(word)
            || !dictionary.contains(word)
        {
            return HintEvent::Ignored;
        }

        self.other_words.insert(word.to_string());

        if self.other_words.len() % WORDS_PER_HINT == 0 {
            self.hints_earned += 1;
            HintEvent::Earned
        } else {
            HintEvent::Counted
        }
    }

    pub fn hints_available(&self) -> usize {
        self.hints_earned - self.hints_used
    }

    /// How many more words are needed for the next hint
    pub fn words_until_next_hint(&self) -> usize {
        WORDS_PER_HINT - self.other_words.len() % WORDS_PER_HINT
    }

    pub fn is_complete(&self) -> bool {
        self.found_spangram && self.found_theme_words.iter().all(|&f| f)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed_theme_words.get(index).copied().unwrap_or(false)
    }

    /// Spends a hint on the first theme word that hasn’t been found or
    /// revealed yet. Returns its index, or None if there are no hints
    /// left or nothing left to reveal.
    pub fn use_hint(&mut self) -> Option<usize> {
        if self.hints_available() == 0 {
            return None;
        }

        let index = self.found_theme_words
            .iter()
            .zip(self.revealed_theme_words.iter())
            .position(|(&found, &revealed)| !found && !revealed)?;

        self.revealed_theme_words[index] = true;
        self.hints_used += 1;

        Some(index)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dictionary() -> HashSet<String> {
        ["SAND", "SANDS", "DUNE", "DUNES", "TIDE", "TIDES", "SUN"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn other(word: &str) -> Judgement {
        Judgement::Other(word.to_string())
    }

    #[test]
    fn earning() {
        let dictionary = dictionary();
        let mut tracker = HintTracker::new(2);

        assert_eq!(tracker.words_until_next_hint(), 3);
        assert_eq!(tracker.record(&other("DUNE"), &dictionary), HintEvent::Counted);
        // Already found
        assert_eq!(tracker.record(&other("DUNE"), &dictionary), HintEvent::Ignored);
        // Too short
        assert_eq!(tracker.record(&other("SUN"), &dictionary), HintEvent::Ignored);
        // Not a word
        assert_eq!(tracker.record(&other("ZZZZ"), &dictionary), HintEvent::Ignored);
        assert_eq!(tracker.record(&other("TIDE"), &dictionary), HintEvent::Counted);
        assert_eq!(tracker.words_until_next_hint(), 1);
        assert_eq!(tracker.hints_available(), 0);
        assert_eq!(tracker.record(&other("DUNES"), &dictionary), HintEvent::Earned);
        assert_eq!(tracker.hints_available(), 1);
        assert_eq!(tracker.words_until_next_hint(), 3);
    }

    #[test]
    fn using() {
        let dictionary = dictionary().into_iter().collect::<BTreeSet<_>>();
        let mut tracker = HintTracker::new(3);

        assert_eq!(tracker.use_hint(), None);

        for word in ["DUNE", "DUNES", "TIDE", "SAND", "SANDS"] {
            tracker.record(&other(word), &dictionary);
        }

        assert_eq!(tracker.hints_available(), 1);

        tracker.record(&Judgement::ThemeWord(0), &dictionary);

        assert_eq!(tracker.use_hint(), Some(1));
        assert_eq!(tracker.hints_available(), 0);
        assert_eq!(tracker.use_hint(), None);
    }

    #[test]
    fn hints_move_on() {
        let dictionary = dictionary();
        let mut tracker = HintTracker::new(3);

        for word in ["DUNE", "DUNES", "TIDE", "TIDES", "SAND", "SANDS"] {
            tracker.record(&other(word), &dictionary);
        }

        assert_eq!(tracker.hints_available(), 2);

        // The first hint is still unfound but the second one points
        // at a different word
        assert_eq!(tracker.use_hint(), Some(0));
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
        assert_eq!(tracker.use_hint(), Some(1));
        assert_eq!(tracker.hints_available(), 0);

        assert!(!tracker.is_revealed(7));
    }

    #[test]
    fn nothing_left_to_reveal() {
        let dictionary = dictionary();
        let mut tracker = HintTracker::new(1);

        for word in ["DUNE", "DUNES", "TIDE", "TIDES", "SAND", "SANDS"] {
            tracker.record(&other(word), &dictionary);
        }

        assert_eq!(tracker.use_hint(), Some(0));
        // The only word is already revealed so the hint isn’t spent
        assert_eq!(tracker.use_hint(), None);
        assert_eq!(tracker.hints_available(), 1);
    }

    #[test]
    fn complete() {
        let dictionary = dictionary();
        let mut tracker = HintTracker::new(2);

        tracker.record(&Judgement::ThemeWord(1), &dictionary);
        tracker.record(&Judgement::ThemeWord(0), &dictionary);
        assert!(!tracker.is_complete());

        tracker.record(&Judgement::Spangram, &dictionary);
        assert!(tracker.is_complete());
    }
}
