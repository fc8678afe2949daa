//! Console rendering of the intersection.
//!
//! Each direction is drawn as three rows (red, yellow, green) with one
//! column per light. North is drawn on top, west and east side by side,
//! south at the bottom.

use crate::light::{LightColor, LightDisplay, LightSet};
use crate::table::{Direction, LightSetTable, INT_DIRECTIONS};
use std::fmt::Write;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_GREY: &str = "\x1b[90m";
const COLOR_GREEN: &str = "\x1b[32m";
const COLOR_YELLOW: &str = "\x1b[33m";
const COLOR_RED: &str = "\x1b[31m";

/// Clear the terminal and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const INDENT: &str = "             ";
const GUTTER: &str = "           ";

#[derive(Clone, Copy)]
enum Row {
    Red,
    Yellow,
    Green,
}

const ROWS: [Row; 3] = [Row::Red, Row::Yellow, Row::Green];

/// Reports whether any direction's step cursor moved since the last check.
#[derive(Clone, Debug, Default)]
pub struct ChangeTracker {
    last: Option<[usize; INT_DIRECTIONS]>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` on the first call and whenever a cursor has moved.
    pub fn changed(&mut self, table: &LightSetTable) -> bool {
        let current = table.step_indices();
        let changed = self.last != Some(current);
        self.last = Some(current);
        changed
    }
}

/// Render every direction of `table`.
pub fn render(table: &LightSetTable) -> String {
    let mut out = String::new();
    let north = table.get(Direction::North);
    let west = table.get(Direction::West);
    let east = table.get(Direction::East);
    let south = table.get(Direction::South);

    let _ = writeln!(out, "{INDENT}North: {}", north.current_step());
    render_column(&mut out, north);

    let _ = writeln!(
        out,
        "West: {}{GUTTER}        East: {}",
        west.current_step(),
        east.current_step()
    );
    for row in ROWS {
        render_row(&mut out, row, west);
        out.push_str(GUTTER);
        render_row(&mut out, row, east);
        out.push('\n');
    }
    out.push('\n');

    let _ = writeln!(out, "{INDENT}South: {}", south.current_step());
    render_column(&mut out, south);
    out
}

fn render_column(out: &mut String, set: &LightSet) {
    for row in ROWS {
        out.push_str(INDENT);
        render_row(out, row, set);
        out.push('\n');
    }
    out.push('\n');
}

fn render_row(out: &mut String, row: Row, set: &LightSet) {
    for light in set.lights() {
        let glyph = match light.display {
            LightDisplay::Unused => {
                out.push_str("   ");
                continue;
            }
            LightDisplay::Solid => "O ",
            LightDisplay::Arrow => match row {
                Row::Green => "<-",
                Row::Red | Row::Yellow => "O ",
            },
        };
        let color = match (row, light.color) {
            (Row::Red, LightColor::Red) => COLOR_RED,
            (Row::Yellow, LightColor::Yellow) => COLOR_YELLOW,
            (Row::Green, LightColor::Green) => COLOR_GREEN,
            (Row::Green, LightColor::YellowArrow) => COLOR_YELLOW,
            _ => COLOR_GREY,
        };
        let _ = write!(out, "{color}{glyph} {COLOR_RESET}");
    }
}
