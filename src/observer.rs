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

use std::time::Duration;
use log::{debug, warn};

/// Receives progress events from the layout engine. Every method
/// does nothing by default.
pub trait Observer {
    fn attempt_started(&mut self, _attempt: u32) {}

    fn spangram_failed(&mut self, _attempt: u32) {}

    fn word_exhausted(&mut self, _attempt: u32, _word: &str) {}

    fn deadline_reached(&mut self, _attempt: u32, _elapsed: Duration) {}

    /// A layout was found but reading `word` back off the grid gave
    /// `found` instead
    fn verification_failed(&mut self, _attempt: u32, _word: &str, _found: &str) {}

    fn layout_found(&mut self, _attempt: u32, _elapsed: Duration) {}

    fn gave_up(&mut self, _attempts: u32, _elapsed: Duration) {}
}

pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Forwards the events to the `log` crate
pub struct LogObserver;

impl Observer for LogObserver {
    fn attempt_started(&mut self, attempt: u32) {
        debug!("starting layout attempt {}", attempt + 1);
    }

    fn spangram_failed(&mut self, attempt: u32) {
        debug!("attempt {}: no spanning path for the spangram", attempt + 1);
    }

    fn word_exhausted(&mut self, attempt: u32, word: &str) {
        debug!("attempt {}: ran out of placements for “{}”", attempt + 1, word);
    }

    fn deadline_reached(&mut self, attempt: u32, elapsed: Duration) {
        debug!(
            "attempt {}: deadline reached after {} ms",
            attempt + 1,
            elapsed.as_millis(),
        );
    }

    fn verification_failed(&mut self, attempt: u32, word: &str, found: &str) {
        warn!(
            "attempt {}: grid spells “{}” along the path for “{}”",
            attempt + 1,
            found,
            word,
        );
    }

    fn layout_found(&mut self, attempt: u32, elapsed: Duration) {
        debug!(
            "layout found on attempt {} after {} ms",
            attempt + 1,
            elapsed.as_millis(),
        );
    }

    fn gave_up(&mut self, attempts: u32, elapsed: Duration) {
        debug!(
            "giving up after {} attempts and {} ms",
            attempts,
            elapsed.as_millis(),
        );
    }
}
