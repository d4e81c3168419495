use crate::scorer::{Query, ScoreOptions, ScoreResult};

pub const DEFAULT_LIMIT: usize = 20;

/// A candidate that matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<'a> {
    /// Position of the candidate in the original list.
    pub index: usize,
    pub text: &'a str,
    pub score: ScoreResult,
}

#[derive(Debug, Clone, Default)]
pub struct Ranking<'a> {
    /// Best matches first, at most `limit` of them.
    pub top: Vec<Ranked<'a>>,
    /// How many candidates matched before truncation.
    pub matched: usize,
    pub total: usize,
}

/// Score every candidate against `query`, best first, ties in input order.
pub fn rank<'a, S: AsRef<str>>(
    candidates: &'a [S],
    query: &str,
    options: &ScoreOptions,
    limit: usize,
) -> Ranking<'a> {
    let prepared = Query::new(query, options);

    let mut hits: Vec<Ranked<'a>> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let text = candidate.as_ref();
            prepared.score(text).map(|score| Ranked { index, text, score })
        })
        .collect();

    // stable, so equal totals keep candidate order
    hits.sort_by(|a, b| b.score.total.cmp(&a.score.total));

    let matched = hits.len();
    hits.truncate(limit);

    log::debug!(
        "query {:?}: {} of {} candidates matched",
        query,
        matched,
        candidates.len()
    );

    Ranking {
        top: hits,
        matched,
        total: candidates.len(),
    }
}
