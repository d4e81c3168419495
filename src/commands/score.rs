use sift::config::Config;
use sift::error::Result;
use sift::scorer::{ScoreResult, fuzzy_score};

pub async fn run_score(text: &str, pattern: &str, json: bool, config: &Config) -> Result<()> {
    let result = fuzzy_score(text, pattern, &config.scoring);
    print!("{}", format_breakdown(result.as_ref(), json)?);
    Ok(())
}

pub fn format_breakdown(result: Option<&ScoreResult>, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(&result)?;
        out.push('\n');
        return Ok(out);
    }

    let Some(r) = result else {
        return Ok("no match\n".to_string());
    };

    let runs: Vec<String> = r.straight_runs.iter().map(|n| n.to_string()).collect();
    Ok(format!(
        "total:      {}\n\
         copies:     {}\n\
         deletes:    {}\n\
         boundaries: {}\n\
         kills:      {}\n\
         runs:       [{}]\n",
        r.total,
        r.copy_count,
        r.delete_count,
        r.boundary_count,
        r.kill_count,
        runs.join(", ")
    ))
}
