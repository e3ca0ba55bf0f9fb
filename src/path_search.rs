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
use super::geometry::{Coord, Path};
use super::grid_state::GridState;

/// Number of steps the search takes between looks at the clock
const STEPS_PER_CLOCK_CHECK: u32 = 256;

/// The deadline passed before the search could finish
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfTime;

fn shuffled_moves<R: Rng + ?Sized>(
    state: &GridState,
    in_path: &[bool],
    coord: Coord,
    rng: &mut R,
) -> Vec<Coord> {
    let geometry = state.geometry();

    let mut moves = geometry
        .neighbours(coord)
        .filter(|&n| {
            state.is_free(n)
                && geometry
                .coord_to_index(n)
                .map(|index| !in_path[index])
                .unwrap_or(false)
        })
        .collect::<Vec<_>>();

    moves.shuffle(rng);

    moves
}

/// Searches for a path of free cells starting at `start` that is long
/// enough to hold `word`. The neighbours of each cell are tried in a
/// random order so that repeated searches give different layouts. The
/// state isn’t modified. The caller commits the path if it wants it.
///
/// A failed search can visit a huge number of partial paths so the
/// deadline is checked every few hundred steps.
pub fn find_path<R, C>(
    word: &[char],
    start: Coord,
    state: &GridState,
    rng: &mut R,
    deadline: &Deadline<C>,
) -> Result<Option<Path>, OutOfTime>
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    if word.is_empty() || !state.is_free(start) {
        return Ok(None);
    }

    // Don’t bother searching if the word can’t fit in the free cells
    // connected to the start
    if state.free_region_size(start) < word.len() {
        return Ok(None);
    }

    let geometry = state.geometry();
    let mut in_path = vec![false; geometry.n_cells()];
    let mut path = Vec::with_capacity(word.len());

    let Ok(start_index) = geometry.coord_to_index(start)
    else {
        return Ok(None);
    };

    in_path[start_index] = true;
    path.push(start);

    if path.len() >= word.len() {
        return Ok(Some(path));
    }

    // Each entry is the list of untried moves for the cell at the
    // same position in the path
    let mut stack = Vec::with_capacity(word.len());
    stack.push(shuffled_moves(state, &in_path, start, rng));

    let mut n_steps = 0u32;

    while let Some(moves) = stack.last_mut() {
        if n_steps % STEPS_PER_CLOCK_CHECK == 0 && deadline.has_passed() {
            return Err(OutOfTime);
        }

        n_steps = n_steps.wrapping_add(1);

        match moves.pop() {
            Some(next) => {
                let Ok(index) = geometry.coord_to_index(next)
                else {
                    continue;
                };

                in_path[index] = true;
                path.push(next);

                if path.len() >= word.len() {
                    return Ok(Some(path));
                }

                let next_moves = shuffled_moves(state, &in_path, next, rng);
                stack.push(next_moves);
            },
            None => {
                // Backtrack
                stack.pop();

                if let Some(index) = path.pop()
                    .and_then(|last| geometry.coord_to_index(last).ok())
                {
                    in_path[index] = false;
                }
            },
        }
    }

    Ok(None)
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::clock::FrozenClock;
    use super::super::geometry::{Geometry, has_repeated_cells};
    use std::cell::Cell;
    use std::time::Duration;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn search(
        word: &[char],
        start: Coord,
        state: &GridState,
        rng: &mut StdRng,
    ) -> Option<Path> {
        find_path(word, start, state, rng, &Deadline::never()).unwrap()
    }

    /// Moves forward a millisecond every time it is read
    struct TickingClock {
        ticks: Cell<u64>,
    }

    impl Clock for TickingClock {
        fn elapsed(&self) -> Duration {
            self.ticks.set(self.ticks.get() + 1);
            Duration::from_millis(self.ticks.get())
        }
    }

    #[test]
    fn empty_grid() {
        let state = GridState::new(Geometry::default());
        let mut rng = StdRng::seed_from_u64(1);
        let word = chars("BREEZE");

        for start in Geometry::default().coords() {
            let path = search(&word, start, &state, &mut rng).unwrap();

            assert_eq!(path.len(), word.len());
            assert_eq!(path[0], start);
            assert!(state.geometry().is_valid_selection(&path));
        }
    }

    #[test]
    fn avoids_used_cells() {
        let mut state = GridState::new(Geometry::new(3, 3));
        let wall = [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)];
        state.commit(&chars("ABC"), &wall);

        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let path = search(&chars("XYZ"), Coord::new(0, 2), &state, &mut rng)
                .unwrap();

            assert!(path.iter().all(|&c| c.col == 2));
            assert!(!has_repeated_cells(&path));
        }

        // The wall leaves only three cells on each side
        assert_eq!(
            search(&chars("WXYZ"), Coord::new(0, 0), &state, &mut rng),
            None,
        );
        // Can’t start on a used cell
        assert_eq!(
            search(&chars("XY"), Coord::new(1, 1), &state, &mut rng),
            None,
        );
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let geometry = Geometry::new(1, 5);
        let state = GridState::new(geometry);
        let mut rng = StdRng::seed_from_u64(3);

        // From the end of a single row there is only one way
        let path = search(&chars("HELLO"), Coord::new(0, 0), &state, &mut rng)
            .unwrap();
        assert_eq!(path, geometry.coords().collect::<Vec<_>>());

        // From the middle the path would have to double back
        assert_eq!(
            search(&chars("HELLO"), Coord::new(0, 2), &state, &mut rng),
            None,
        );

        let path = search(&chars("HEL"), Coord::new(0, 2), &state, &mut rng)
            .unwrap();
        assert_eq!(path.len(), 3);
        assert!(geometry.is_valid_selection(&path));
    }

    #[test]
    fn single_letter() {
        let state = GridState::new(Geometry::new(2, 2));
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            search(&chars("A"), Coord::new(1, 0), &state, &mut rng),
            Some(vec![Coord::new(1, 0)]),
        );
        assert_eq!(search(&[], Coord::new(1, 0), &state, &mut rng), None);
    }

    #[test]
    fn seeded_search_is_repeatable() {
        let state = GridState::new(Geometry::default());
        let word = chars("BEACHGOING");

        let a = search(&word, Coord::new(0, 0), &state, &mut StdRng::seed_from_u64(42));
        let b = search(&word, Coord::new(0, 0), &state, &mut StdRng::seed_from_u64(42));

        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn expired_deadline() {
        let state = GridState::new(Geometry::default());
        let mut rng = StdRng::seed_from_u64(0);
        let deadline = Deadline::new(&FrozenClock, Duration::ZERO);

        assert_eq!(
            find_path(&chars("BREEZE"), Coord::new(0, 0), &state, &mut rng, &deadline),
            Err(OutOfTime),
        );

        // Searches that end before the first step don’t look at the clock
        assert_eq!(
            find_path(&chars("B"), Coord::new(0, 0), &state, &mut rng, &deadline),
            Ok(Some(vec![Coord::new(0, 0)])),
        );
    }

    #[test]
    fn hopeless_search_stops_at_deadline() {
        // Cut off the two top corners so that each one can only be
        // entered from the cell below it. A path through every free
        // cell would need both corners as ends but it has to start
        // at the bottom, so there is no path. Searching every
        // possibility would take practically forever.
        let mut state = GridState::new(Geometry::default());
        state.commit(
            &chars("WXYZ"),
            &[
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(0, 4),
                Coord::new(1, 4),
            ],
        );

        let word = vec!['A'; state.n_free()];
        let clock = TickingClock { ticks: Cell::new(0) };
        let deadline = Deadline::new(&clock, Duration::from_millis(50));
        let mut rng = StdRng::seed_from_u64(6);

        assert_eq!(
            find_path(&word, Coord::new(7, 2), &state, &mut rng, &deadline),
            Err(OutOfTime),
        );
        assert_eq!(clock.ticks.get(), 50);
    }
}
