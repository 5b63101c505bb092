#![cfg(feature = "std")]

//! Text rendering of board grids for the terminal front-end.

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{Cell, Grid},
    config::BOARD_SIZE,
};

/// Character shown for a cell.
pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Miss => 'O',
        Cell::Ship => 'S',
        Cell::Damaged => 'X',
        Cell::Sunk => '$',
    }
}

/// Render a grid as a boxed table: column letters on top, row numbers on the
/// left, one `|`-separated cell per coordinate.
pub fn render_grid(grid: &Grid) -> String {
    let size = BOARD_SIZE as usize;
    let mut out = String::new();

    let letters: Vec<String> = (0..size)
        .map(|c| ((b'A' + c as u8) as char).to_string())
        .collect();
    let _ = writeln!(out, "{}{} ", " ".repeat(6), letters.join(&" ".repeat(5)));

    let dashes = format!("   {}-", "-".repeat(6 * size));
    let _ = writeln!(out, "{}", dashes);
    for (r, row) in grid.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|cell| cell_symbol(*cell).to_string()).collect();
        let _ = writeln!(out, "{:>2} |  {}  |", r + 1, cells.join("  |  "));
        let _ = writeln!(out, "{}", dashes);
    }
    out
}

/// Print a grid to stdout.
pub fn print_grid(grid: &Grid) {
    std::print!("{}", render_grid(grid));
}
