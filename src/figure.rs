//! Figures extracted from a sketch: straight lines and text labels.
//!
//! Coordinates are grid cells, not pixels. Mapping cells onto a drawing
//! surface is up to the renderer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Decoration at one end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Ending {
    /// Arrow head (`<`, `>`, `^`, `v`)
    Arrow,
    /// Filled circle (`*`)
    Circle,
}

impl Ending {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ending::Arrow => "arrow",
            Ending::Circle => "circle",
        }
    }
}

/// Stroke or label color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Black,
    /// Marked with `~`/`!` on strokes or backslashes around text.
    Gray,
}

impl Color {
    /// CSS color string for this color.
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Gray => "#666",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_css())
    }
}

/// Direction a line was traced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Seed character to axis, `None` for anything that can't start a line.
    pub fn from_seed(c: char) -> Option<Self> {
        match c {
            '-' => Some(Axis::Horizontal),
            '|' => Some(Axis::Vertical),
            _ => None,
        }
    }

    /// Unit step along the axis.
    pub fn step(&self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }

    /// Unit step across the axis.
    pub fn cross_step(&self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
        }
    }
}

/// An axis-aligned line segment.
///
/// Arrow endpoints sit one cell beyond the arrow glyph, so the stroke
/// touches what it points at instead of overlapping it. Circle endpoints
/// sit on the `*` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Line {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    pub start: Option<Ending>,
    pub end: Option<Ending>,
    pub color: Color,
    pub axis: Axis,
}

impl Line {
    pub fn is_horizontal(&self) -> bool {
        self.axis == Axis::Horizontal
    }

    pub fn is_vertical(&self) -> bool {
        self.axis == Axis::Vertical
    }

    /// Number of cells between the endpoints, inclusive.
    pub fn cells(&self) -> usize {
        ((self.x1 - self.x0).abs() + (self.y1 - self.y0).abs()) as usize + 1
    }

    /// Endpoints as they appear in the sketch, with arrow adjustment undone.
    pub fn glyph_span(&self) -> ((i32, i32), (i32, i32)) {
        let (dx, dy) = self.axis.step();
        let (mut x0, mut y0, mut x1, mut y1) = (self.x0, self.y0, self.x1, self.y1);
        if self.start == Some(Ending::Arrow) {
            x0 += dx;
            y0 += dy;
        }
        if self.end == Some(Ending::Arrow) {
            x1 -= dx;
            y1 -= dy;
        }
        ((x0, y0), (x1, y1))
    }
}

/// A text label anchored at its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Text {
    pub x0: i32,
    pub y0: i32,
    pub text: String,
    pub color: Color,
}

/// Anything extracted from a sketch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Figure {
    Line(Line),
    Text(Text),
}

impl Figure {
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Figure::Line(line) => Some(line),
            Figure::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Figure::Text(text) => Some(text),
            Figure::Line(_) => None,
        }
    }
}

impl From<Line> for Figure {
    fn from(line: Line) -> Self {
        Figure::Line(line)
    }
}

impl From<Text> for Figure {
    fn from(text: Text) -> Self {
        Figure::Text(text)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ending = |e: Option<Ending>| e.map_or("none", |e| e.as_str());
        write!(
            f,
            "line ({},{})-({},{}) start={} end={} color={}",
            self.x0,
            self.y0,
            self.x1,
            self.y1,
            ending(self.start),
            ending(self.end),
            self.color
        )
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "text ({},{}) {:?} color={}",
            self.x0, self.y0, self.text, self.color
        )
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Line(line) => fmt::Display::fmt(line, f),
            Figure::Text(text) => fmt::Display::fmt(text, f),
        }
    }
}
