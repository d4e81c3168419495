use serde::Serialize;
use sift::config::Config;
use sift::error::Result;
use sift::ranking::{Ranking, rank};
use sift::scorer::ScoreResult;
use sift::source::load_candidates;
use std::path::Path;

#[derive(Serialize)]
struct JsonHit<'a> {
    index: usize,
    text: &'a str,
    score: &'a ScoreResult,
}

pub async fn run_filter(query: &str, file: Option<&Path>, json: bool, config: &Config) -> Result<()> {
    let candidates = load_candidates(file)?;
    let ranking = rank(&candidates, query, &config.scoring, config.limit);
    print!("{}", format_ranking(&ranking, json)?);
    Ok(())
}

pub fn format_ranking(ranking: &Ranking<'_>, json: bool) -> Result<String> {
    if json {
        let hits: Vec<JsonHit> = ranking
            .top
            .iter()
            .map(|r| JsonHit {
                index: r.index,
                text: r.text,
                score: &r.score,
            })
            .collect();
        let mut out = serde_json::to_string_pretty(&hits)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for r in &ranking.top {
        out.push_str(&format!("[{}] {}\n", r.score.total, r.text));
    }
    Ok(out)
}
