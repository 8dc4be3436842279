//! Options controlling how sketch text is turned into a grid.

use crate::error::{ParseError, Result};

/// Options for parsing ASCII sketches.
///
/// # Example
///
/// ```rust
/// use aasketch::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_tab_width(Some(4));
/// let figures = parse_with_options("\t-->", &options).unwrap();
/// assert_eq!(figures.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Expand tabs to the next multiple of this many columns before
    /// building the grid. `None` keeps each tab as a single opaque cell,
    /// which then shows up as text.
    pub tab_width: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self { tab_width: None }
    }

    pub fn with_tab_width(mut self, tab_width: Option<usize>) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Reject option combinations that can't produce a sensible grid.
    pub fn validate(&self) -> Result<()> {
        match self.tab_width {
            Some(0) => Err(ParseError::InvalidTabWidth(0)),
            _ => Ok(()),
        }
    }
}
