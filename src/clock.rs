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

/// Measures the time since the layout operation started.
/// `std::time::Instant` panics on wasm32-unknown-unknown so the
/// browser build supplies its own clock.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

#[cfg(not(target_arch = "wasm32"))]
pub struct InstantClock {
    start: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl InstantClock {
    pub fn start() -> InstantClock {
        InstantClock { start: std::time::Instant::now() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for InstantClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(target_arch = "wasm32")]
pub struct DateClock {
    start: f64,
}

#[cfg(target_arch = "wasm32")]
impl DateClock {
    pub fn start() -> DateClock {
        DateClock { start: js_sys::Date::now() }
    }
}

#[cfg(target_arch = "wasm32")]
impl Clock for DateClock {
    fn elapsed(&self) -> Duration {
        let ms = (js_sys::Date::now() - self.start).max(0.0);
        Duration::from_secs_f64(ms / 1000.0)
    }
}

/// A clock that never moves. Useful when the result has to depend
/// only on the random seed.
pub struct FrozenClock;

impl Clock for FrozenClock {
    fn elapsed(&self) -> Duration {
        Duration::ZERO
    }
}

/// A time limit measured against a clock
pub struct Deadline<'a, C: Clock + ?Sized> {
    clock: &'a C,
    limit: Duration,
}

impl<'a, C: Clock + ?Sized> Deadline<'a, C> {
    pub fn new(clock: &'a C, limit: Duration) -> Deadline<'a, C> {
        Deadline { clock, limit }
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    pub fn has_passed(&self) -> bool {
        self.clock.elapsed() >= self.limit
    }
}

impl Deadline<'static, FrozenClock> {
    pub fn never() -> Deadline<'static, FrozenClock> {
        Deadline { clock: &FrozenClock, limit: Duration::MAX }
    }
}
