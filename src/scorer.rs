//! Fuzzy subsequence scoring.
//!
//! [`fuzzy_score`] decides whether every char of a pattern occurs, in order,
//! inside a text and returns a [`ScoreResult`] that ranks contiguous and
//! token-aligned matches above scattered ones. Calls share no state and are
//! safe to run from any number of threads at once.

pub mod boundary;
pub mod kill_zone;
pub mod options;
pub mod result;
mod scan;

pub use boundary::{BoundaryClassifier, BoundaryFlags};
pub use kill_zone::kill_zone;
pub use options::{EdgeSegments, ScoreOptions, SeparatorPolicy, Weights};
pub use result::{ScoreResult, run_bonus};

use scan::Scan;

/// Score `text` against `pattern`, or `None` if `pattern` is not a
/// subsequence of `text`.
pub fn fuzzy_score(text: &str, pattern: &str, options: &ScoreOptions) -> Option<ScoreResult> {
    Query::new(pattern, options).score(text)
}

/// Scalar form of [`fuzzy_score`].
pub fn fuzzy_total(text: &str, pattern: &str, options: &ScoreOptions) -> Option<i64> {
    fuzzy_score(text, pattern, options).map(|r| r.total)
}

/// A pattern prepared once and scored against many candidates.
#[derive(Debug, Clone)]
pub struct Query<'o> {
    pattern: Vec<char>,
    options: &'o ScoreOptions,
}

impl<'o> Query<'o> {
    pub fn new(pattern: &str, options: &'o ScoreOptions) -> Self {
        Query {
            pattern: pattern.chars().collect(),
            options,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn score(&self, text: &str) -> Option<ScoreResult> {
        if self.pattern.is_empty() {
            return Some(ScoreResult::default());
        }

        let matched = Scan::new(text, &self.pattern, self.options).run()?;
        let kill = kill_zone(&text[..matched.cell.byte], self.options.path_separator);
        Some(ScoreResult::assemble(
            matched.tally,
            kill,
            &self.options.weights,
        ))
    }
}

/// Owns its options; cheap to share behind an `Arc` across workers.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    options: ScoreOptions,
}

impl Scorer {
    pub fn new(options: ScoreOptions) -> Self {
        Scorer { options }
    }

    pub fn query(&self, pattern: &str) -> Query<'_> {
        Query::new(pattern, &self.options)
    }

    pub fn score(&self, text: &str, pattern: &str) -> Option<ScoreResult> {
        fuzzy_score(text, pattern, &self.options)
    }

    pub fn total(&self, text: &str, pattern: &str) -> Option<i64> {
        fuzzy_total(text, pattern, &self.options)
    }
}
