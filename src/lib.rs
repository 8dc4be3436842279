//! Extract figures from ASCII art sketches.
//!
//! A sketch is plain text where `-` and `|` draw straight lines, `+` joins
//! them, `<`, `>`, `^`, `v` and `*` decorate line ends, and everything else
//! is text:
//!
//! ```text
//!   +-------+        *---> done
//!   | start |--+
//!   +-------+  |     \gray note\
//!              v
//! ```
//!
//! [`parse`] turns such text into an ordered list of [`Figure`]s: first
//! every line, in the order it was found scanning top to bottom and left to
//! right, then every text label in the same scan order. Coordinates are
//! grid cells; drawing them is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use aasketch::{parse, Ending, Figure};
//!
//! let figures = parse("*--> target");
//! assert_eq!(figures.len(), 2);
//!
//! let line = figures[0].as_line().unwrap();
//! assert_eq!(line.start, Some(Ending::Circle));
//! assert_eq!(line.end, Some(Ending::Arrow));
//!
//! let label = figures[1].as_text().unwrap();
//! assert_eq!(label.text, "target");
//! ```

pub mod chars;
pub mod error;
pub mod figure;
pub mod finder;
pub mod grid;
pub mod layout;
pub mod options;
pub mod text;

pub use error::ParseError;
pub use figure::{Axis, Color, Ending, Figure, Line, Text};
pub use grid::Grid;
pub use layout::to_ascii;
pub use options::ParseOptions;

/// Parse a sketch with default options.
///
/// Never fails: characters that aren't lines, junctions, or decorations
/// become text.
pub fn parse(source: &str) -> Vec<Figure> {
    extract(Grid::new(source))
}

/// Parse a sketch with custom options.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> error::Result<Vec<Figure>> {
    options.validate()?;
    Ok(extract(Grid::build(source, options.tab_width)))
}

fn extract(mut grid: Grid) -> Vec<Figure> {
    log::debug!("parsing {}x{} grid", grid.width, grid.height);

    let mut figures = Vec::new();
    finder::find_lines(&mut grid, &mut figures);
    figures.extend(text::find_text(&grid).into_iter().map(Figure::Text));
    figures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \n \n").is_empty());
    }

    #[test]
    fn test_single_char() {
        let figures = parse("x");
        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].as_text().map(|t| t.text.as_str()), Some("x"));
    }

    #[test]
    fn test_lines_before_text() {
        let figures = parse("a\n--");
        assert!(figures[0].as_line().is_some());
        assert_eq!(figures[1].as_text().map(|t| t.text.as_str()), Some("a"));
    }

    #[test]
    fn test_tabs_opaque_by_default() {
        let figures = parse("\t--");
        assert_eq!(figures.len(), 2);
        let line = figures[0].as_line().unwrap();
        assert_eq!(line.x0, 1);
        assert_eq!(figures[1].as_text().map(|t| t.text.as_str()), Some("\t"));
    }

    #[test]
    fn test_tab_expansion() {
        let options = ParseOptions::new().with_tab_width(Some(4));
        let figures = parse_with_options("\t--", &options).unwrap();
        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].as_line().unwrap().x0, 4);
    }

    #[test]
    fn test_invalid_options() {
        let options = ParseOptions::new().with_tab_width(Some(0));
        assert_eq!(
            parse_with_options("--", &options),
            Err(ParseError::InvalidTabWidth(0))
        );
    }

    #[test]
    fn test_text_after_line_never_merges_into_line() {
        let figures = parse("-- a");
        assert_eq!(figures.len(), 2);
        let label = figures[1].as_text().unwrap();
        assert_eq!((label.x0, label.text.as_str()), (3, "a"));
    }
}
