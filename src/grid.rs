//! The fixed-size board the simulation runs on.
//!
//! A [`Grid`] is a plain value: a row-major vector of cell states plus its
//! dimensions. Nothing ever resizes it, and the engine never mutates one in
//! place; every generation is a freshly allocated grid.

use std::fmt;

use rand::Rng;
use thiserror::Error;

/// Errors produced when building or editing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Either dimension was zero.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions { rows: usize, cols: usize },
    /// The cell count does not fit in memory addressing.
    #[error("a {rows}x{cols} grid has too many cells")]
    TooLarge { rows: usize, cols: usize },
    /// A row had a different length from the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A pattern contained a character that is neither alive nor dead.
    #[error("invalid cell symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { symbol: char, row: usize, col: usize },
    /// A coordinate fell outside the grid.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// The two-symbol alphabet a grid is drawn and read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    /// Symbol for a live cell
    pub alive: char,
    /// Symbol for a dead cell
    pub dead: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            alive: '#',
            dead: '.',
        }
    }
}

/// A two-dimensional board of boolean cells where `true` means alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {
        let len = check_dimensions(rows, cols)?;
        Ok(Grid {
            cells: vec![false; len],
            rows,
            cols,
        })
    }

    /// Wraps an already row-major cell vector of a known non-empty size.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Grid {
        debug_assert!(rows > 0 && cols > 0 && cells.len() == rows * cols);
        Grid { cells, rows, cols }
    }

    /// Builds a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Grid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let len = check_dimensions(height, width)?;

        let mut cells = Vec::with_capacity(len);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        Ok(Grid {
            cells,
            rows: height,
            cols: width,
        })
    }

    /// Parses a hand-written pattern, one line per row.
    ///
    /// `#`, `O` and `*` are alive; `.` is dead. Whitespace is never a cell:
    /// each line is trimmed and blank lines at the start and end are ignored,
    /// so patterns can be written as indented string literals. Use
    /// [`Grid::parse_with`] for text whose dead symbol is a space.
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |i| i + 1);

        Grid::from_lines(&lines[..end], |symbol| match symbol {
            '#' | 'O' | '*' => Some(true),
            '.' => Some(false),
            _ => None,
        })
    }

    /// Parses text drawn with `symbols`, one line per row, exactly as given.
    ///
    /// Nothing is trimmed, so this reads back the output of [`Grid::render`]
    /// for any alphabet, including a space for dead cells.
    pub fn parse_with(text: &str, symbols: Symbols) -> Result<Grid, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        Grid::from_lines(&lines, |symbol| {
            if symbol == symbols.alive {
                Some(true)
            } else if symbol == symbols.dead {
                Some(false)
            } else {
                None
            }
        })
    }

    fn from_lines(
        lines: &[&str],
        cell: impl Fn(char) -> Option<bool>,
    ) -> Result<Grid, GridError> {
        let mut rows = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let cells = line
                .chars()
                .enumerate()
                .map(|(col, symbol)| {
                    cell(symbol).ok_or(GridError::InvalidSymbol { symbol, row, col })
                })
                .collect::<Result<Vec<bool>, GridError>>()?;
            rows.push(cells);
        }

        Grid::from_rows(rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the state of the cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Sets the state of the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[row * self.cols + col] = alive;
        Ok(())
    }

    /// Counts the living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Iterates over the coordinates of every living cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / self.cols, i % self.cols))
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Renders one line per row and one character per column.
    pub fn render(&self, symbols: Symbols) -> String {
        let mut text = String::with_capacity((self.cols + 1) * self.rows);
        for row in self.iter_rows() {
            for &cell in row {
                text.push(if cell { symbols.alive } else { symbols.dead });
            }
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Symbols::default()))
    }
}

/// Checks that `rows` x `cols` is a usable shape and returns the cell count.
pub fn check_dimensions(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyDimensions { rows, cols });
    }
    rows.checked_mul(cols)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(GridError::TooLarge { rows, cols })
}

/// Creates a `rows` x `cols` grid where every cell is independently alive
/// with probability one half.
///
/// The random source is passed in so callers can use a seeded generator.
pub fn make_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let len = check_dimensions(rows, cols)?;
    let cells = (0..len).map(|_| rng.gen_bool(0.5)).collect();
    log::trace!("made random {rows}x{cols} grid");
    Ok(Grid::from_cells(rows, cols, cells))
}
