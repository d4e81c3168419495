use super::options::Weights;
use super::scan::Tally;
use serde::Serialize;

/// Structured breakdown of one successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub total: i64,
    pub copy_count: usize,
    pub delete_count: usize,
    pub boundary_count: usize,
    pub kill_count: usize,
    /// Lengths of contiguous matched runs, in scan order (rightmost first).
    pub straight_runs: Vec<usize>,
}

impl ScoreResult {
    pub(crate) fn assemble(tally: Tally, kill_count: usize, weights: &Weights) -> Self {
        let bonus = tally
            .straight_runs
            .iter()
            .fold(0i64, |acc, &len| acc.saturating_add(run_bonus(len)));

        let total = [
            weighted(tally.copies, weights.copy),
            weighted(tally.deletes, weights.delete),
            weighted(tally.boundaries, weights.boundary),
            weighted(kill_count, weights.kill),
            bonus,
        ]
        .into_iter()
        .fold(0i64, i64::saturating_add);

        ScoreResult {
            total,
            copy_count: tally.copies,
            delete_count: tally.deletes,
            boundary_count: tally.boundaries,
            kill_count,
            straight_runs: tally.straight_runs,
        }
    }
}

/// Bonus for a contiguous run of `len` matches: `2^(len+1) - 1`, saturating.
pub fn run_bonus(len: usize) -> i64 {
    let exp = u32::try_from(len.saturating_add(1)).unwrap_or(u32::MAX);
    2i64.saturating_pow(exp).saturating_sub(1)
}

fn weighted(count: usize, weight: i64) -> i64 {
    i64::try_from(count)
        .unwrap_or(i64::MAX)
        .saturating_mul(weight)
}
