//! Word boundary classification.
//!
//! A token is a maximal run of non-separator characters, further split where
//! an ASCII lowercase letter is followed by an ASCII uppercase one
//! (`fooBar` is `foo` + `Bar`). Every token has exactly one start index and
//! one end index, so start and end anchors always come in pairs.

/// Boundary flags of a single text index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryFlags {
    pub is_start: bool,
    pub is_end: bool,
}

/// Pure predicate over a character and its two neighbours.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryClassifier<'a> {
    separators: &'a [char],
}

impl<'a> BoundaryClassifier<'a> {
    pub fn new(separators: &'a [char]) -> Self {
        BoundaryClassifier { separators }
    }

    pub fn is_separator(&self, ch: char) -> bool {
        self.separators.contains(&ch)
    }

    /// Whether `ch` begins a token, given the character to its left
    /// (`None` at the start of the text).
    pub fn is_start(&self, left: Option<char>, ch: char) -> bool {
        if self.is_separator(ch) {
            return false;
        }
        match left {
            None => true,
            Some(prev) => self.is_separator(prev) || is_case_transition(prev, ch),
        }
    }

    /// Whether `ch` ends a token, given the character to its right
    /// (`None` at the end of the text).
    pub fn is_end(&self, ch: char, right: Option<char>) -> bool {
        if self.is_separator(ch) {
            return false;
        }
        match right {
            None => true,
            Some(next) => self.is_separator(next) || is_case_transition(ch, next),
        }
    }

    pub fn classify(&self, left: Option<char>, ch: char, right: Option<char>) -> BoundaryFlags {
        BoundaryFlags {
            is_start: self.is_start(left, ch),
            is_end: self.is_end(ch, right),
        }
    }

    /// Char index of the start of the token that ends at char index `index`.
    ///
    /// `prefix` is the text strictly left of that character.
    pub fn token_start(&self, prefix: &str, ch: char, index: usize) -> usize {
        let mut current = ch;
        let mut start = index;
        let mut rest = prefix.chars().rev();
        loop {
            match rest.next() {
                Some(prev) if !self.is_start(Some(prev), current) => {
                    current = prev;
                    start -= 1;
                }
                _ => return start,
            }
        }
    }
}

/// `left` lowercase followed by `right` uppercase, ASCII letters only.
pub fn is_case_transition(left: char, right: char) -> bool {
    left.is_ascii_lowercase() && right.is_ascii_uppercase()
}
