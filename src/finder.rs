//! Line extraction.
//!
//! Lines are pulled out of the grid one at a time: find the first raw
//! stroke character, trace it in both directions, record the line, then
//! erase it so the next search can't see it again. Junctions that another
//! stroke still runs through are re-typed instead of erased.

use log::{debug, trace};

use crate::chars::*;
use crate::figure::{Axis, Color, Ending, Figure, Line};
use crate::grid::Grid;

/// Extract every line from the grid, appending them to `figures` in the
/// order their seeds are found. Consumed cells are erased from `grid`.
pub fn find_lines(grid: &mut Grid, figures: &mut Vec<Figure>) {
    let mut cursor = 0;
    let mut count = 0;

    while let Some((x, y, axis)) = find_seed(grid, cursor) {
        let line = trace_line(grid, x, y, axis);
        erase_line(grid, &line);

        // Every cell before the traced span was already seed-free, and
        // re-typed junctions can only appear inside the span.
        cursor = line.y0 as usize * grid.width + line.x0 as usize;

        let line = adjust_arrows(line);
        debug!("extracted {}", line);
        figures.push(line.into());
        count += 1;
    }

    debug!("line phase done: {} lines", count);
}

/// First `-` or `|` in row-major order, starting at linear index `from`.
fn find_seed(grid: &Grid, from: usize) -> Option<(i32, i32, Axis)> {
    let total = grid.width * grid.height;
    (from..total).find_map(|i| {
        let (x, y) = ((i % grid.width) as i32, (i / grid.width) as i32);
        grid.get(x, y).and_then(Axis::from_seed).map(|axis| (x, y, axis))
    })
}

fn ending_at(grid: &Grid, x: i32, y: i32) -> Option<Ending> {
    let c = grid.get(x, y);
    if is_circle(c) {
        Some(Ending::Circle)
    } else if is_ending(c) {
        Some(Ending::Arrow)
    } else {
        None
    }
}

/// Trace the full extent of the stroke through `(x, y)`.
///
/// The returned line spans the decoration glyphs themselves; arrow
/// adjustment happens after erasure.
fn trace_line(grid: &Grid, x: i32, y: i32, axis: Axis) -> Line {
    let (dx, dy) = axis.step();
    let mut color = Color::Black;

    let (mut x0, mut y0) = (x, y);
    while is_line_body(grid.get(x0 - dx, y0 - dy)) {
        x0 -= dx;
        y0 -= dy;
        if is_gray_modifier(grid.get(x0, y0)) {
            color = Color::Gray;
        }
    }
    let start = ending_at(grid, x0 - dx, y0 - dy);
    if start.is_some() {
        x0 -= dx;
        y0 -= dy;
    }

    let (mut x1, mut y1) = (x, y);
    while is_line_body(grid.get(x1 + dx, y1 + dy)) {
        x1 += dx;
        y1 += dy;
        if is_gray_modifier(grid.get(x1, y1)) {
            color = Color::Gray;
        }
    }
    let end = ending_at(grid, x1 + dx, y1 + dy);
    if end.is_some() {
        x1 += dx;
        y1 += dy;
    }

    Line {
        x0,
        y0,
        x1,
        y1,
        start,
        end,
        color,
        axis,
    }
}

/// Erase every cell from start to end, inclusive.
fn erase_line(grid: &mut Grid, line: &Line) {
    let (dx, dy) = line.axis.step();
    let (mut x, mut y) = (line.x0, line.y0);
    loop {
        erase_cell(grid, x, y, line.axis);
        if x == line.x1 && y == line.y1 {
            break;
        }
        x += dx;
        y += dy;
    }
}

fn erase_cell(grid: &mut Grid, x: i32, y: i32, axis: Axis) {
    let c = grid.get(x, y);
    if is_erasable(c) {
        grid.clear(x, y);
        return;
    }
    if !is_junction(c) {
        return;
    }

    // Keep the junction alive for a stroke crossing this one.
    let (cx, cy) = axis.cross_step();
    let before = grid.get(x - cx, y - cy);
    let after = grid.get(x + cx, y + cy);
    if is_vertical_body(before) || is_vertical_body(after) {
        trace!("junction at ({},{}) re-typed to '|'", x, y);
        grid.set(x, y, '|');
    } else if is_horizontal_body(before) || is_horizontal_body(after) {
        trace!("junction at ({},{}) re-typed to '-'", x, y);
        grid.set(x, y, '-');
    } else {
        trace!("junction at ({},{}) has no crossing stroke, blanked", x, y);
        grid.clear(x, y);
    }
}

/// Push arrow endpoints one cell outward so the stroke touches its target
/// instead of running through the arrow head.
fn adjust_arrows(mut line: Line) -> Line {
    let (dx, dy) = line.axis.step();
    if line.start == Some(Ending::Arrow) {
        line.x0 -= dx;
        line.y0 -= dy;
    }
    if line.end == Some(Ending::Arrow) {
        line.x1 += dx;
        line.y1 += dy;
    }
    line
}
