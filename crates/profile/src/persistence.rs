use crate::env::state_dir;
use anyhow::Result;
use nexr_engine::SkillSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// One committed suggestion batch, as stored in the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitEntry {
    pub ts: u64,
    pub session: String,
    pub skills: Vec<String>,
}

const HISTORY_LIMIT: usize = 50;

pub fn skills_file() -> Result<PathBuf> {
    Ok(state_dir()?.join("skills.json"))
}

pub fn history_file() -> Result<PathBuf> {
    Ok(state_dir()?.join("history.json"))
}

/// Load the persisted skill profile, or an empty one when none exists yet.
pub fn load_skills() -> Result<SkillSet> {
    let path = skills_file()?;
    if !path.exists() {
        return Ok(SkillSet::new());
    }
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(Into::into)
}

pub fn save_skills(skills: &SkillSet) -> Result<()> {
    let path = skills_file()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(skills)?)?;
    Ok(())
}

pub fn load_history() -> Result<Vec<CommitEntry>> {
    let path = history_file()?;
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = std::fs::read_to_string(path)?;
    let mut list: Vec<CommitEntry> = serde_json::from_str(&data)?;
    if list.len() > HISTORY_LIMIT {
        list.drain(0..list.len() - HISTORY_LIMIT);
    }
    Ok(list)
}

pub fn save_history(mut history: Vec<CommitEntry>) -> Result<()> {
    if history.len() > HISTORY_LIMIT {
        history.drain(0..history.len() - HISTORY_LIMIT);
    }
    let path = history_file()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(&history)?)?;
    Ok(())
}

/// Append one commit to the history log, trimming the oldest entries past the cap.
pub fn append_history(entry: CommitEntry) -> Result<()> {
    let mut history = load_history()?;
    history.push(entry);
    save_history(history)
}

/// Seconds since the Unix epoch, for history timestamps.
pub fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
