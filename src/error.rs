//! Errors for invalid parse configuration.
//!
//! Parsing itself never fails: every character is either part of a line or
//! ends up as text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("tab width must be at least 1, got {0}")]
    InvalidTabWidth(usize),
}

pub type Result<T> = std::result::Result<T, ParseError>;
