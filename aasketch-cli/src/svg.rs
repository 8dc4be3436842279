//! Plain SVG rendering of extracted figures.
//!
//! Each grid cell is `CELL_SIZE` pixels square and figures are anchored at
//! cell centers.

use std::fmt::Write;

use aasketch::{Ending, Figure, Line, Text};

/// Pixels per grid cell
pub const CELL_SIZE: f64 = 20.0;

/// Length of each arrow head stroke in pixels
const ARROW_LENGTH: f64 = 20.0;

/// Angle between an arrow head stroke and its line, in radians
const ARROW_SPREAD: f64 = 0.5;

const CIRCLE_RADIUS: f64 = 5.0;

const FONT: &str = r#"font-family="'Gloria Hallelujah', cursive" font-size="20pt""#;

fn px(cell: i32) -> f64 {
    cell as f64 * CELL_SIZE + CELL_SIZE / 2.0
}

/// Canvas size in pixels: far enough right and down to include every
/// line end plus one cell, widened for text that runs past the lines.
pub fn canvas_size(figures: &[Figure]) -> (f64, f64) {
    let mut width: f64 = 0.0;
    let mut height: f64 = 0.0;
    for figure in figures {
        match figure {
            Figure::Line(line) => {
                width = width.max(px(line.x0.max(line.x1) + 1));
                height = height.max(px(line.y0.max(line.y1) + 1));
            }
            Figure::Text(text) => {
                let len = text.text.chars().count() as i32;
                width = width.max(px(text.x0 + len));
                height = height.max(px(text.y0 + 1));
            }
        }
    }
    (width, height)
}

/// Generate a complete SVG document for `figures`, drawn in order.
pub fn render(figures: &[Figure]) -> String {
    let (width, height) = canvas_size(figures);
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    );

    for figure in figures {
        match figure {
            Figure::Line(line) => line_svg(&mut svg, line),
            Figure::Text(text) => text_svg(&mut svg, text),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn line_svg(svg: &mut String, line: &Line) {
    let color = line.color.as_css();
    let (x0, y0) = (px(line.x0), px(line.y0));
    let (x1, y1) = (px(line.x1), px(line.y1));

    let _ = writeln!(
        svg,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="2" stroke-linecap="round"/>"#,
        x0, y0, x1, y1, color
    );

    let (dx, dy) = line.axis.step();
    // Arrow heads open back along the line, away from the tip.
    ending_svg(svg, line.start, x0, y0, (dx as f64, dy as f64), color);
    ending_svg(svg, line.end, x1, y1, (-dx as f64, -dy as f64), color);
}

fn ending_svg(
    svg: &mut String,
    ending: Option<Ending>,
    x: f64,
    y: f64,
    back: (f64, f64),
    color: &str,
) {
    match ending {
        Some(Ending::Circle) => {
            let _ = writeln!(
                svg,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                x, y, CIRCLE_RADIUS, color
            );
        }
        Some(Ending::Arrow) => {
            let alpha = back.1.atan2(back.0);
            let (x3, y3) = (
                x + ARROW_LENGTH * (alpha + ARROW_SPREAD).cos(),
                y + ARROW_LENGTH * (alpha + ARROW_SPREAD).sin(),
            );
            let (x4, y4) = (
                x + ARROW_LENGTH * (alpha - ARROW_SPREAD).cos(),
                y + ARROW_LENGTH * (alpha - ARROW_SPREAD).sin(),
            );
            let _ = writeln!(
                svg,
                r#"<polyline points="{:.2},{:.2} {},{} {:.2},{:.2}" fill="none" stroke="{}" stroke-width="2" stroke-linecap="round"/>"#,
                x3, y3, x, y, x4, y4, color
            );
        }
        None => {}
    }
}

fn text_svg(svg: &mut String, text: &Text) {
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" dominant-baseline="middle" fill="{}" {}>{}</text>"#,
        px(text.x0),
        px(text.y0),
        text.color.as_css(),
        FONT,
        escape_xml(&text.text)
    );
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
