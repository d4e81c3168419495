use crate::error::{Result, SiftError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read one candidate per line, keeping order and dropping blank lines.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Load candidates from `path`, or from stdin when no path (or `-`) is given.
pub fn load_candidates(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).map_err(|source| SiftError::Source {
                path: p.display().to_string(),
                source,
            })?;
            let lines = read_lines(BufReader::new(file))?;
            log::info!("loaded {} candidates from {}", lines.len(), p.display());
            Ok(lines)
        }
        _ => {
            let lines = read_lines(io::stdin().lock())?;
            log::info!("loaded {} candidates from stdin", lines.len());
            Ok(lines)
        }
    }
}
