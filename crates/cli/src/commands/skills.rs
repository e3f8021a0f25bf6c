//! CLI handler for the `skills` command.

use anyhow::Result;

use nexr_profile::{load_skills, save_skills};

/// Handle the `skills` command: apply edits, then list the profile.
pub(crate) fn handle_skills_command(add: Vec<String>, remove: Vec<String>) -> Result<()> {
    let mut skills = load_skills()?;
    let mut changed = false;
    for name in add {
        changed |= skills.insert(name);
    }
    for name in &remove {
        changed |= skills.remove(name);
    }
    if changed {
        save_skills(&skills)?;
    }

    if skills.is_empty() {
        println!("(no skills on profile)");
        return Ok(());
    }
    for name in skills.iter() {
        println!("{name}");
    }
    Ok(())
}
