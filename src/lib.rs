//! # Game of Life
//!
//! Conway's Game of Life on a fixed-size, non-wrapping grid.
//!
//! The core is three pure operations: [`make_grid`] builds a random starting
//! grid, [`count_neighbours`] counts the live cells around a position, and
//! [`update_grid`] computes the next generation into a new grid. [`Life`]
//! wraps them into an endless step generator with running statistics, and
//! [`ui`] renders grids for the terminal front-end in `main.rs`.

pub mod config;
pub mod engine;
pub mod grid;
pub mod stats;
pub mod ui;

pub use config::{Config, ConfigError};
pub use engine::{count_neighbours, next_state, update_grid, Life};
pub use grid::{make_grid, Grid, GridError, Symbols};
pub use stats::Stats;
