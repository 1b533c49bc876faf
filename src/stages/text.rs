//! Grid-text codec for stage layouts and test fixtures.
//!
//! | char | cell |
//! |------|------|
//! | `@`  | INVALID |
//! | `.`  | EMPTY |
//! | `#`  | NEUTRAL |
//! | `a` / `A` | player 0 trivial / special |
//! | `b` / `B` | player 1 trivial / special |
//!
//! A newline ends a row. Spaces, tabs and carriage returns are ignored, so
//! indented multi-line literals parse as written; blank lines are skipped.
//! Every row must have the same width.

use crate::core::error::GridTextError;
use crate::core::grid::Grid;
use crate::core::space::{Space, EMPTY, INVALID, NEUTRAL, SPECIAL, TRIVIAL};

fn decode(ch: char) -> Option<Space> {
    Some(match ch {
        '@' => INVALID,
        '.' => EMPTY,
        '#' => NEUTRAL,
        'a' => TRIVIAL,
        'A' => SPECIAL,
        'b' => -TRIVIAL,
        'B' => -SPECIAL,
        _ => return None,
    })
}

/// Printable character for a cell value, `None` for values that have no
/// text form.
#[must_use]
pub fn encode(value: Space) -> Option<char> {
    Some(match value {
        INVALID => '@',
        EMPTY => '.',
        NEUTRAL => '#',
        TRIVIAL => 'a',
        SPECIAL => 'A',
        v if v == -TRIVIAL => 'b',
        v if v == -SPECIAL => 'B',
        _ => return None,
    })
}

/// Parse grid text into a [`Grid`].
///
/// ```
/// use tableturf::stages::parse_grid;
///
/// let grid = parse_grid("
///     a..
///     .#B
/// ").unwrap();
/// assert_eq!(grid.size(), (3, 2));
/// ```
pub fn parse_grid(text: &str) -> Result<Grid, GridTextError> {
    let mut values = Vec::new();
    let mut width: Option<usize> = None;
    let mut rows = 0usize;

    for (line_no, line) in text.lines().enumerate() {
        let row_start = values.len();
        for ch in line.chars() {
            if matches!(ch, ' ' | '\t' | '\r') {
                continue;
            }
            let value = decode(ch).ok_or(GridTextError::UnknownChar {
                ch,
                line: line_no + 1,
            })?;
            values.push(value);
        }
        let found = values.len() - row_start;
        if found == 0 {
            continue;
        }
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(GridTextError::RaggedRow {
                    row: rows,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let width = width.ok_or(GridTextError::Empty)?;
    Ok(Grid::from_values(width as u32, rows as u32, values))
}

/// Print a grid as text, one `\n`-terminated line per row.
///
/// Panics if the grid holds a value with no text form (a programming
/// error: only the documented cell values are ever written).
#[must_use]
pub fn print_grid(grid: &Grid) -> String {
    let (w, h) = grid.size();
    let mut out = String::with_capacity(((w + 1) * h) as usize);
    for row in grid.values().chunks(w.max(1) as usize).take(h as usize) {
        for &v in row {
            out.push(encode(v).unwrap_or_else(|| panic!("cell value {v} has no text form")));
        }
        out.push('\n');
    }
    out
}
