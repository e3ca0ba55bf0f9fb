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

use rand::Rng;
use rand::seq::SliceRandom;
use super::clock::{Clock, Deadline};
use super::geometry::{Edge, Path};
use super::grid_state::GridState;
use super::path_search::{self, OutOfTime};

/// Tries to place the spangram so that it touches two opposite edges
/// of the grid. Start cells are taken from each edge in turn, top,
/// left, bottom then right, with the cells of each edge shuffled. On
/// success the word is committed to `state`.
pub fn place<R, C>(
    word: &[char],
    state: &mut GridState,
    rng: &mut R,
    deadline: &Deadline<C>,
) -> Result<Option<Path>, OutOfTime>
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    let geometry = state.geometry();

    let edges = Edge::ALL.map(|edge| {
        let mut starts = geometry.edge(edge);
        starts.shuffle(rng);
        starts
    });

    for start in edges.iter().flatten() {
        let Some(path) = path_search::find_path(
            word,
            *start,
            state,
            rng,
            deadline,
        )?
        else {
            continue;
        };

        if geometry.spans_opposite_edges(&path) {
            state.commit(word, &path);
            return Ok(Some(path));
        }
    }

    Ok(None)
}
