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
use wasm_bindgen::prelude::*;
use web_sys::console;
use rand::SeedableRng;
use rand::rngs::StdRng;
use super::clock::DateClock;
use super::geometry::Coord;
use super::layout::{self, LayoutConfig};
use super::observer::Observer;
use super::puzzle::Puzzle;

struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn verification_failed(&mut self, attempt: u32, word: &str, found: &str) {
        console::log_1(&format!(
            "attempt {}: grid spells “{}” along the path for “{}”",
            attempt + 1,
            found,
            word,
        ).into());
    }

    fn gave_up(&mut self, attempts: u32, elapsed: Duration) {
        console::log_1(&format!(
            "no layout found after {} attempts and {} ms",
            attempts,
            elapsed.as_millis(),
        ).into());
    }
}

fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub fn init_wordstrand() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

/// Lays out the words and returns the layout as JSON. The theme words
/// are separated by whitespace. Passing a seed makes the layout
/// repeatable.
#[wasm_bindgen]
pub fn make_layout(
    spangram: &str,
    theme_words: &str,
    seed: Option<u32>,
) -> Result<String, JsValue> {
    let spangram = spangram.trim().to_uppercase();
    let theme_words = theme_words
        .split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed.into()),
        None => StdRng::from_entropy(),
    };

    let layout = layout::generate_with(
        &spangram,
        &theme_words,
        &LayoutConfig::default(),
        &mut rng,
        &DateClock::start(),
        &mut ConsoleObserver,
    ).map_err(to_js_error)?;

    serde_json::to_string(&layout).map_err(to_js_error)
}

/// Judges a path drawn by the player. `selection_json` is a list of
/// `{"row":…,"col":…}` objects. Returns the judgement as JSON.
#[wasm_bindgen]
pub fn judge_selection(
    puzzle_json: &str,
    selection_json: &str,
) -> Result<String, JsValue> {
    let puzzle = Puzzle::from_json(puzzle_json).map_err(to_js_error)?;
    let selection = serde_json::from_str::<Vec<Coord>>(selection_json)
        .map_err(to_js_error)?;

    let judgement = puzzle.judge(&selection).map_err(to_js_error)?;

    serde_json::to_string(&judgement).map_err(to_js_error)
}
