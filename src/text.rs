//! Text label extraction.
//!
//! Runs after every line has been erased. Whatever is left in the grid is
//! swept row by row; each run of non-space characters becomes a token, and
//! tokens separated by exactly one space on the same row join into a
//! single label.

use log::debug;

use crate::chars::{BLANK, GRAY_TEXT_MARK};
use crate::figure::{Color, Text};
use crate::grid::Grid;

/// The label that the next token may still be appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenLabel {
    /// Index into the emitted labels
    index: usize,
    row: usize,
    /// Column just past the last character of the label
    end: usize,
}

/// Accumulates labels for one sweep over the grid.
///
/// Only the most recently emitted label is open for merging; once a token
/// starts a new label the previous one is closed for good.
#[derive(Debug, Default)]
pub struct TextSweep {
    labels: Vec<Text>,
    open: Option<OpenLabel>,
}

impl TextSweep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one token found at `(x, y)`. Tokens must arrive in row-major order.
    pub fn push_token(&mut self, x: usize, y: usize, token: &str) {
        let end = x + token.chars().count();

        if let Some(open) = self.open.as_mut() {
            if open.row == y && open.end + 1 == x {
                let label = &mut self.labels[open.index];
                label.text.push(BLANK);
                label.text.push_str(token);
                open.end = end;
                return;
            }
        }

        let (text, color) = match strip_gray_marks(token) {
            Some(inner) => (inner.to_string(), Color::Gray),
            None => (token.to_string(), Color::Black),
        };

        self.labels.push(Text {
            x0: x as i32,
            y0: y as i32,
            text,
            color,
        });
        self.open = Some(OpenLabel {
            index: self.labels.len() - 1,
            row: y,
            end,
        });
    }

    pub fn finish(self) -> Vec<Text> {
        self.labels
    }
}

/// `\note\` -> `note`. Tokens shorter than two characters never count as
/// marked, so a lone backslash stays literal text.
fn strip_gray_marks(token: &str) -> Option<&str> {
    if token.chars().count() < 2 {
        return None;
    }
    token
        .strip_prefix(GRAY_TEXT_MARK)
        .and_then(|rest| rest.strip_suffix(GRAY_TEXT_MARK))
}

/// Sweep the grid top to bottom, left to right, and collect every label.
pub fn find_text(grid: &Grid) -> Vec<Text> {
    let mut sweep = TextSweep::new();

    for y in 0..grid.height {
        let row = grid.row(y);
        let mut x = 0;
        while x < row.len() {
            if row[x] == BLANK {
                x += 1;
                continue;
            }
            let start = x;
            while x < row.len() && row[x] != BLANK {
                x += 1;
            }
            let token: String = row[start..x].iter().collect();
            sweep.push_token(start, y, &token);
        }
    }

    let labels = sweep.finish();
    debug!("text phase done: {} labels", labels.len());
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<Text> {
        find_text(&Grid::new(source))
    }

    #[test]
    fn test_merge_single_space() {
        let labels = texts("hello world\n");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "hello world");
        assert_eq!((labels[0].x0, labels[0].y0), (0, 0));
        assert_eq!(labels[0].color, Color::Black);
    }

    #[test]
    fn test_no_merge_across_two_spaces() {
        let labels = texts("a  b");
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].text, "b");
        assert_eq!(labels[1].x0, 3);
    }

    #[test]
    fn test_merge_many_tokens() {
        let labels = texts("  one two three   four");
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "one two three");
        assert_eq!(labels[0].x0, 2);
        assert_eq!(labels[1].text, "four");
    }

    #[test]
    fn test_no_merge_across_rows() {
        // "ab" ends at column 2 and "c" starts at column 3 of the next row
        let labels = texts("ab\n   c");
        assert_eq!(labels.len(), 2);
        assert_eq!((labels[1].x0, labels[1].y0), (3, 1));
    }

    #[test]
    fn test_gray_text() {
        let labels = texts("\\note\\\n");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "note");
        assert_eq!(labels[0].color, Color::Gray);
    }

    #[test]
    fn test_gray_label_merges_by_column_extent() {
        let labels = texts("\\a\\ b");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "a b");
        assert_eq!(labels[0].color, Color::Gray);
    }

    #[test]
    fn test_merged_token_keeps_backslashes() {
        let labels = texts("x \\y\\");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "x \\y\\");
        assert_eq!(labels[0].color, Color::Black);
    }

    #[test]
    fn test_lone_backslash_is_literal() {
        let labels = texts("\\");
        assert_eq!(labels[0].text, "\\");
        assert_eq!(labels[0].color, Color::Black);

        let labels = texts("\\\\");
        assert_eq!(labels[0].text, "");
        assert_eq!(labels[0].color, Color::Gray);
    }

    #[test]
    fn test_open_label_closes_after_new_label() {
        let mut sweep = TextSweep::new();
        sweep.push_token(0, 0, "a");
        sweep.push_token(5, 0, "b");
        sweep.push_token(7, 0, "c");
        let labels = sweep.finish();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "a");
        assert_eq!(labels[1].text, "b c");
    }

    #[test]
    fn test_blank_grid() {
        assert!(texts("").is_empty());
        assert!(texts("   \n  ").is_empty());
    }
}
