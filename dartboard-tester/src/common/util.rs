use anyhow::{Context, Result};
use dartboard_game::EngineConfig;
use std::{fs, path::Path};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Engine configuration for every scenario; defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading engine config {}", path.display()))?;
    EngineConfig::from_json(&raw)
        .with_context(|| format!("parsing engine config {}", path.display()))
}
