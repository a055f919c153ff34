//! Text rendering of a grid and the ratatui widgets of the interactive view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use sysinfo::{System, SystemExt};

pub use crate::grid::Symbols;
use crate::grid::Grid;
use crate::stats::Stats;

/// Renders `grid` as one line per row and one character per column.
pub fn render_cells(grid: &Grid, symbols: Symbols) -> String {
    grid.render(symbols)
}

/// Splits the frame into the grid area and the statistics panel.
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)].as_ref())
        .split(area);
    (chunks[0], chunks[1])
}

/// Draws the game grid.
pub fn draw_grid(f: &mut Frame, grid: &Grid, symbols: Symbols, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Game of Life [Space: Play/Pause | Enter: Step | r: Reseed | q: Quit]");

    let paragraph = Paragraph::new(render_cells(grid, symbols))
        .style(Style::default().fg(Color::White))
        .block(block);

    f.render_widget(paragraph, area);
}

/// Formats the statistics panel text.
pub fn stats_text(stats: &Stats, sys: &System, running: bool) -> String {
    let memory_used = sys.used_memory() / 1024; // KB
    let memory_total = sys.total_memory() / 1024;

    format!(
        "Generation: {}\n\
        Current Population: {}\n\
        Cells Created: {}\n\
        Cells Destroyed: {}\n\
        Birth Rate: {:.2}/gen\n\
        Death Rate: {:.2}/gen\n\
        Memory Usage: {}KB/{:.2}MB\n\
        Status: {}\n",
        stats.generation,
        stats.current_population,
        stats.cells_created,
        stats.cells_destroyed,
        stats.birth_rate(),
        stats.death_rate(),
        memory_used,
        memory_total as f64 / 1024.0,
        if running { "Running" } else { "Paused" }
    )
}

/// Draws the statistics panel.
pub fn draw_stats(f: &mut Frame, stats: &Stats, sys: &System, running: bool, area: Rect) {
    let widget = Paragraph::new(stats_text(stats, sys, running))
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: true });

    f.render_widget(widget, area);
}

/// Draws the start screen shown before the first generation.
pub fn draw_welcome(f: &mut Frame, rows: usize, cols: usize) {
    let text = format!(
        "Welcome to Conway's Game of Life!\n\n\
        A random {rows}x{cols} grid is ready.\n\n\
        Press ENTER to start the simulation, q to quit."
    );
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game of Life"));

    f.render_widget(widget, f.size());
}
