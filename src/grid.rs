//! Rectangular character matrix built from sketch source text.

use crate::chars::BLANK;

/// A `width × height` matrix of characters, padded with spaces so that
/// every row has the same length.
///
/// Coordinates are signed so neighbors of border cells can be read
/// directly; anything outside the matrix reads as `None`.
///
/// Tab expansion is only reachable through validated options:
///
/// ```compile_fail
/// let grid = aasketch::Grid::build("\t", Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid, keeping tabs as opaque single cells.
    pub fn new(source: &str) -> Self {
        Self::build(source, None)
    }

    /// Build a grid, expanding tabs to the next multiple of `tab_width`
    /// when one is given.
    ///
    /// `tab_width` must already be validated by `ParseOptions::validate`.
    pub(crate) fn build(source: &str, tab_width: Option<usize>) -> Self {
        if source.is_empty() {
            return Self {
                width: 0,
                height: 0,
                cells: Vec::new(),
            };
        }

        let mut cells: Vec<Vec<char>> = source
            .split('\n')
            .map(|line| match tab_width {
                Some(n) => expand_tabs(line, n),
                None => line.chars().collect(),
            })
            .collect();

        let height = cells.len();
        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(width, BLANK);
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// A grid of the given size filled with spaces.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![BLANK; width]; height],
        }
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Character at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if self.in_bounds(x, y) {
            Some(self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Overwrite the character at `(x, y)`. Writes outside the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, c: char) {
        if self.in_bounds(x, y) {
            self.cells[y as usize][x as usize] = c;
        }
    }

    /// Reset the cell at `(x, y)` to a space.
    pub fn clear(&mut self, x: i32, y: i32) {
        self.set(x, y, BLANK);
    }

    /// Row `y` as a slice of exactly `width` characters.
    pub fn row(&self, y: usize) -> &[char] {
        &self.cells[y]
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Render the grid back to text, one row per line, trailing spaces kept.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}

fn expand_tabs(line: &str, tab_width: usize) -> Vec<char> {
    let mut row = Vec::with_capacity(line.len());
    for c in line.chars() {
        if c == '\t' {
            if tab_width > 0 {
                let pad = tab_width - row.len() % tab_width;
                row.extend(std::iter::repeat(BLANK).take(pad));
            }
        } else {
            row.push(c);
        }
    }
    row
}
