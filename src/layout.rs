//! Laying figures back out as ASCII.
//!
//! This is the inverse of parsing for sketches without ambiguous
//! junctions: parsing the output of [`to_ascii`] yields the same figures in
//! the same order. Layouts that can't be told apart once drawn are the
//! exception: collinear strokes that touch end to end read back as one
//! line, and labels one space apart on a row read back as one label.

use crate::chars::{is_horizontal_body, is_junction, is_vertical_body, GRAY_TEXT_MARK};
use crate::figure::{Axis, Color, Ending, Figure, Line, Text};
use crate::grid::Grid;

/// Width and height in cells needed to hold every glyph of `figures`.
pub fn extent(figures: &[Figure]) -> (usize, usize) {
    let mut width = 0;
    let mut height = 0;
    for figure in figures {
        let (right, bottom) = match figure {
            Figure::Line(line) => {
                let ((x0, y0), (x1, y1)) = line.glyph_span();
                (x0.max(x1) + 1, y0.max(y1) + 1)
            }
            Figure::Text(text) => (text.x0 + text_glyphs(text).len() as i32, text.y0 + 1),
        };
        width = width.max(right.max(0) as usize);
        height = height.max(bottom.max(0) as usize);
    }
    (width, height)
}

/// Render `figures` into ASCII art.
///
/// Perpendicular strokes sharing a cell are joined with `+`. Gray strokes
/// get a single `~` or `!` on their last plain stroke cell, after every
/// stroke is down, so crossings stay intact and the first raw stroke cell
/// (the one parsing finds) is unchanged. A gray stroke with fewer than two
/// plain cells has no room for the marker and comes out black.
pub fn to_ascii(figures: &[Figure]) -> String {
    let (width, height) = extent(figures);
    let mut grid = Grid::blank(width, height);

    let lines = || figures.iter().filter_map(Figure::as_line);
    for line in lines() {
        draw_line(&mut grid, line);
    }
    for line in lines().filter(|line| line.color == Color::Gray) {
        mark_gray(&mut grid, line);
    }
    for text in figures.iter().filter_map(Figure::as_text) {
        draw_text(&mut grid, text);
    }

    let mut out = String::new();
    for y in 0..grid.height {
        let row: String = grid.row(y).iter().collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Cells covered by a line's glyphs, from start to end.
fn glyph_cells(line: &Line) -> Vec<(i32, i32)> {
    let ((x0, y0), (x1, y1)) = line.glyph_span();
    let (mut dx, mut dy) = line.axis.step();
    if (x1 - x0) + (y1 - y0) < 0 {
        dx = -dx;
        dy = -dy;
    }
    let cells = (x1 - x0).abs() + (y1 - y0).abs() + 1;
    (0..cells).map(|i| (x0 + dx * i, y0 + dy * i)).collect()
}

fn draw_line(grid: &mut Grid, line: &Line) {
    let cells = glyph_cells(line);
    let last = cells.len() - 1;

    for (i, &(x, y)) in cells.iter().enumerate() {
        let c = if i == 0 && line.start.is_some() {
            ending_glyph(line.axis, line.start, true)
        } else if i == last && line.end.is_some() {
            ending_glyph(line.axis, line.end, false)
        } else {
            stroke_glyph(grid.get(x, y), line.axis)
        };
        grid.set(x, y, c);
    }
}

/// Swap the last plain stroke cell of a gray line for its gray variant,
/// as long as another plain cell is left to seed the line.
fn mark_gray(grid: &mut Grid, line: &Line) {
    let (plain, gray) = match line.axis {
        Axis::Horizontal => ('-', '~'),
        Axis::Vertical => ('|', '!'),
    };
    let plain_cells: Vec<(i32, i32)> = glyph_cells(line)
        .into_iter()
        .filter(|&(x, y)| grid.get(x, y) == Some(plain))
        .collect();
    if let [_, .., (x, y)] = plain_cells.as_slice() {
        grid.set(*x, *y, gray);
    }
}

/// Stroke character for `axis`, turning perpendicular crossings into `+`.
fn stroke_glyph(existing: Option<char>, axis: Axis) -> char {
    let crosses = match axis {
        Axis::Horizontal => is_vertical_body(existing),
        Axis::Vertical => is_horizontal_body(existing),
    };
    if crosses || is_junction(existing) {
        return '+';
    }
    match axis {
        Axis::Horizontal => '-',
        Axis::Vertical => '|',
    }
}

fn ending_glyph(axis: Axis, ending: Option<Ending>, at_start: bool) -> char {
    match (ending, axis, at_start) {
        (Some(Ending::Circle), _, _) => '*',
        (_, Axis::Horizontal, true) => '<',
        (_, Axis::Horizontal, false) => '>',
        (_, Axis::Vertical, true) => '^',
        (_, Axis::Vertical, false) => 'v',
    }
}

fn text_glyphs(text: &Text) -> Vec<char> {
    match text.color {
        Color::Gray => std::iter::once(GRAY_TEXT_MARK)
            .chain(text.text.chars())
            .chain(std::iter::once(GRAY_TEXT_MARK))
            .collect(),
        Color::Black => text.text.chars().collect(),
    }
}

fn draw_text(grid: &mut Grid, text: &Text) {
    for (i, c) in text_glyphs(text).into_iter().enumerate() {
        grid.set(text.x0 + i as i32, text.y0, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_extent() {
        let figures = parse("-->\n\n  label");
        assert_eq!(extent(&figures), (7, 3));
        assert_eq!(extent(&[]), (0, 0));
    }

    #[test]
    fn test_arrow_round_trip() {
        assert_eq!(to_ascii(&parse("-->")), "-->\n");
        assert_eq!(to_ascii(&parse("^\n|\nv")), "^\n|\nv\n");
    }

    #[test]
    fn test_crossing_written_as_junction() {
        let source = " |\n-+-\n |\n";
        assert_eq!(to_ascii(&parse(source)), source);
    }

    #[test]
    fn test_gray_line_keeps_one_modifier() {
        assert_eq!(to_ascii(&parse("*-~->")), "*--~>\n");
        assert_eq!(to_ascii(&parse("|\n!\n|")), "|\n|\n!\n");
    }

    #[test]
    fn test_gray_marker_skips_crossings() {
        // the vertical stroke is found first and must stay first
        let source = " |\n-+-\n !\n";
        assert_eq!(to_ascii(&parse(source)), source);

        // with only the crossing and one plain cell there is no room left
        assert_eq!(to_ascii(&parse(" !\n-+-\n")), " |\n-+-\n");
    }

    #[test]
    fn test_gray_text_rewrapped() {
        assert_eq!(to_ascii(&parse("  \\note\\")), "  \\note\\\n");
    }

    #[test]
    fn test_box_with_label() {
        let source = "+----+\n| hi |\n+----+\n";
        assert_eq!(to_ascii(&parse(source)), source);
    }
}
