use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$STATEMENT_HOME`, or `~/.statement`.
pub fn statement_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("STATEMENT_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".statement"))
}

pub fn ensure_statement_home() -> Result<PathBuf> {
    let dir = statement_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
