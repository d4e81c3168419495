//! Fuzzy subsequence matching and ranking for path-like candidates.

pub mod config;
pub mod error;
pub mod ranking;
pub mod scorer;
pub mod source;

pub use error::{Result, SiftError};
pub use ranking::{Ranked, Ranking, rank};
pub use scorer::{ScoreOptions, ScoreResult, Scorer, fuzzy_score, fuzzy_total};
