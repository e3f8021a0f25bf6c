//! CLI handler for the `history` command.

use anyhow::Result;

use nexr_profile::load_history;

/// Handle the `history` command: print recent commits, newest first.
pub(crate) fn handle_history_command(limit: usize) -> Result<()> {
    let history = load_history().unwrap_or_default();
    let entries: Vec<_> = history.into_iter().rev().take(limit).collect();
    if entries.is_empty() {
        println!("(no history)");
        return Ok(());
    }
    for entry in entries {
        println!(
            "{} | {} | {}",
            entry.ts,
            entry.session,
            entry.skills.join(", ")
        );
    }
    Ok(())
}
