//! Conway's update rule and the step generator built on it.

use crate::grid::Grid;
use crate::stats::Stats;

/// Counts the live cells in the Moore neighbourhood of `(row, col)`.
///
/// Positions outside the grid are treated as absent rather than wrapped,
/// so edge cells have five candidate neighbours and corner cells three.
pub fn count_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    debug_assert!(row < grid.rows() && col < grid.cols());

    let mut count = 0;
    for dy in -1..=1isize {
        for dx in -1..=1isize {
            if dx == 0 && dy == 0 {
                continue;
            }

            let (Some(ny), Some(nx)) = (row.checked_add_signed(dy), col.checked_add_signed(dx))
            else {
                continue;
            };

            if grid.get(ny, nx) == Some(true) {
                count += 1;
            }
        }
    }
    count
}

/// The next state of a single cell given its current state and live neighbours:
///
/// * Any live cell with fewer than two live neighbours dies (underpopulation)
/// * Any live cell with two or three live neighbours survives
/// * Any live cell with more than three live neighbours dies (overpopulation)
/// * Any dead cell with exactly three live neighbours becomes alive (reproduction)
/// * Every other dead cell stays dead
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    match (alive, neighbours) {
        (true, n) if n < 2 => false,
        (true, 2) | (true, 3) => true,
        (true, _) => false,
        (false, 3) => true,
        (otherwise, _) => otherwise,
    }
}

/// Computes the next generation of `old_grid` into a new grid of the same size.
///
/// Every cell is decided from `old_grid` alone; the input is never modified.
pub fn update_grid(old_grid: &Grid) -> Grid {
    let (rows, cols) = (old_grid.rows(), old_grid.cols());
    let mut cells = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let alive = old_grid.get(row, col) == Some(true);
            let neighbours = count_neighbours(old_grid, row, col);
            cells.push(next_state(alive, neighbours));
        }
    }

    Grid::from_cells(rows, cols, cells)
}

/// A running simulation: the current generation plus its statistics.
///
/// As an [`Iterator`], `next()` yields the current grid and then advances one
/// generation. The sequence never ends.
#[derive(Debug, Clone)]
pub struct Life {
    grid: Grid,
    stats: Stats,
}

impl Life {
    /// Starts a simulation at generation zero.
    pub fn new(grid: Grid) -> Life {
        let stats = Stats::new(grid.population() as u64);
        Life { grid, stats }
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Statistics accumulated since generation zero.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Advances exactly one generation and returns the new grid.
    pub fn step(&mut self) -> &Grid {
        let next = update_grid(&self.grid);

        let mut created = 0;
        let mut destroyed = 0;
        for (old_row, new_row) in self.grid.iter_rows().zip(next.iter_rows()) {
            for (&was, &is) in old_row.iter().zip(new_row) {
                match (was, is) {
                    (false, true) => created += 1,
                    (true, false) => destroyed += 1,
                    _ => {}
                }
            }
        }

        self.grid = next;
        self.stats
            .record(created, destroyed, self.grid.population() as u64);
        log::trace!(
            "generation {}: +{created} -{destroyed}",
            self.stats.generation
        );
        &self.grid
    }
}

impl Iterator for Life {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        let current = self.grid.clone();
        self.step();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_no_neighbours() {
        let grid = Grid::new(4, 4).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(count_neighbours(&grid, row, col), 0);
            }
        }
    }

    #[test]
    fn interior_cell_with_full_neighbourhood_counts_eight() {
        let grid = Grid::parse(
            "
            ###
            #.#
            ###
            ",
        )
        .unwrap();
        assert_eq!(count_neighbours(&grid, 1, 1), 8);
    }

    #[test]
    fn centre_cell_is_not_its_own_neighbour() {
        let grid = Grid::parse("###\n###\n###").unwrap();
        assert_eq!(count_neighbours(&grid, 1, 1), 8);
    }

    #[test]
    fn edges_do_not_wrap() {
        let grid = Grid::parse("####\n####\n####").unwrap();
        assert_eq!(count_neighbours(&grid, 0, 0), 3);
        assert_eq!(count_neighbours(&grid, 2, 3), 3);
        assert_eq!(count_neighbours(&grid, 0, 1), 5);
        assert_eq!(count_neighbours(&grid, 1, 0), 5);

        // A live cell on the opposite edge is not a neighbour of column 0.
        let grid = Grid::parse("...#\n....\n....").unwrap();
        assert_eq!(count_neighbours(&grid, 0, 0), 0);
        assert_eq!(count_neighbours(&grid, 2, 0), 0);
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn update_keeps_dimensions_and_input() {
        let grid = Grid::parse(".#..\n.#..\n.#..").unwrap();
        let before = grid.clone();
        let next = update_grid(&grid);
        assert_eq!((next.rows(), next.cols()), (3, 4));
        assert_eq!(grid, before);
        assert_eq!(next, Grid::parse("....\n###.\n....").unwrap());
    }

    #[test]
    fn life_tracks_births_and_deaths() {
        let mut life = Life::new(Grid::parse(".....\n..#..\n..#..\n..#..\n.....").unwrap());
        assert_eq!(life.stats().current_population, 3);

        life.step();
        assert_eq!(life.stats().generation, 1);
        assert_eq!(life.stats().cells_created, 2);
        assert_eq!(life.stats().cells_destroyed, 2);
        assert_eq!(life.stats().current_population, 3);
    }

    #[test]
    fn iterator_yields_current_then_advances() {
        let start = Grid::parse("...\n###\n...").unwrap();
        let mut life = Life::new(start.clone());
        assert_eq!(life.next(), Some(start.clone()));
        assert_eq!(life.grid(), &Grid::parse(".#.\n.#.\n.#.").unwrap());
        assert_eq!(life.next().map(|g| g.population()), Some(3));
        assert_eq!(life.grid(), &start);
    }
}
