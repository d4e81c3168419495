use serde::{Deserialize, Serialize};

pub const DEFAULT_SEPARATORS: [char; 5] = [' ', '_', '-', '/', '.'];
pub const DEFAULT_PATH_SEPARATOR: char = '/';

/// Per-event weights folded into the final total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Qc, one matched character
    pub copy: i64,
    /// Qd, one unmatched character committed inside a token
    pub delete: i64,
    /// Qb, one match that only partially covers its token
    pub boundary: i64,
    /// Qk, one leading character in the last path component
    pub kill: i64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            copy: 1,
            delete: -1,
            boundary: -1,
            kill: -1,
        }
    }
}

/// Whether a separator skipped over as a mismatch counts as a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorPolicy {
    #[default]
    Charge,
    Exclude,
}

/// How a token touching the end of the text becomes an active segment.
///
/// `Strict` waits until both anchors of the token have been seen. `Open`
/// activates the trailing token as soon as its end anchor is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSegments {
    #[default]
    Strict,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreOptions {
    pub case_sensitive: bool,
    pub weights: Weights,
    pub separators: Vec<char>,
    pub path_separator: char,
    pub separator_policy: SeparatorPolicy,
    pub edge_segments: EdgeSegments,
}

impl ScoreOptions {
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_separators(mut self, separators: impl IntoIterator<Item = char>) -> Self {
        self.separators = separators.into_iter().collect();
        self
    }

    pub fn with_separator_policy(mut self, policy: SeparatorPolicy) -> Self {
        self.separator_policy = policy;
        self
    }

    pub fn with_edge_segments(mut self, edges: EdgeSegments) -> Self {
        self.edge_segments = edges;
        self
    }

    /// Compare a text char against a pattern char, folding ASCII case only.
    pub(crate) fn chars_eq(&self, text: char, pattern: char) -> bool {
        if self.case_sensitive {
            text == pattern
        } else {
            text.to_ascii_lowercase() == pattern.to_ascii_lowercase()
        }
    }
}

impl Default for ScoreOptions {
    fn default() -> Self {
        ScoreOptions {
            case_sensitive: false,
            weights: Weights::default(),
            separators: DEFAULT_SEPARATORS.to_vec(),
            path_separator: DEFAULT_PATH_SEPARATOR,
            separator_policy: SeparatorPolicy::default(),
            edge_segments: EdgeSegments::default(),
        }
    }
}
