//! Character classification for sketch glyphs.
//!
//! Every predicate takes an `Option<char>` so that out-of-bounds lookups
//! (`None`) fall through as "not this kind of character".

/// Any character a traced stroke may run through, including junctions and
/// the gray stroke variants.
pub fn is_line_body(c: Option<char>) -> bool {
    matches!(c, Some('-' | '|' | '+' | '~' | '!'))
}

/// Characters that still carry a vertical stroke through a junction.
pub fn is_vertical_body(c: Option<char>) -> bool {
    matches!(c, Some('|' | '!' | '+'))
}

/// Characters that still carry a horizontal stroke through a junction.
pub fn is_horizontal_body(c: Option<char>) -> bool {
    matches!(c, Some('-' | '~' | '+'))
}

/// Gray stroke variants: `~` behaves like `-`, `!` like `|`.
pub fn is_gray_modifier(c: Option<char>) -> bool {
    matches!(c, Some('~' | '!'))
}

/// Endpoint decorations.
pub fn is_ending(c: Option<char>) -> bool {
    matches!(c, Some('*' | '<' | '>' | '^' | 'v'))
}

pub fn is_circle(c: Option<char>) -> bool {
    c == Some('*')
}

pub fn is_junction(c: Option<char>) -> bool {
    c == Some('+')
}

/// Characters blanked outright when a line is erased over them.
pub fn is_erasable(c: Option<char>) -> bool {
    matches!(
        c,
        Some('|' | '-' | '*' | '>' | '<' | '^' | 'v' | '~' | '!')
    )
}

/// Gray text markup delimiter.
pub const GRAY_TEXT_MARK: char = '\\';

pub const BLANK: char = ' ';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_body() {
        for c in ['-', '|', '+', '~', '!'] {
            assert!(is_line_body(Some(c)));
        }
        assert!(!is_line_body(Some('*')));
        assert!(!is_line_body(None));
        assert!(is_gray_modifier(Some('~')));
        assert!(!is_gray_modifier(Some('-')));
    }

    #[test]
    fn test_junction_neighbors() {
        assert!(is_vertical_body(Some('+')));
        assert!(is_horizontal_body(Some('+')));
        assert!(is_vertical_body(Some('!')));
        assert!(!is_vertical_body(Some('-')));
        assert!(is_horizontal_body(Some('~')));
        assert!(!is_horizontal_body(Some('|')));
    }

    #[test]
    fn test_endings() {
        for c in ['*', '<', '>', '^', 'v'] {
            assert!(is_ending(Some(c)));
        }
        assert!(!is_ending(Some('V')));
        assert!(!is_ending(Some('o')));
        assert!(is_circle(Some('*')));
        assert!(!is_circle(Some('>')));
    }
}
