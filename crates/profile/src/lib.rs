//! Persistent skill profile state.
//!
//! This crate provides utilities for:
//! - Resolving the on-disk state directory, with an env override for tests.
//! - Loading and saving the profile's skill list.
//! - Keeping a capped log of committed suggestion batches.

pub mod env;
pub mod persistence;

pub use env::{home_dir, state_dir, STATE_DIR_ENV};
pub use persistence::{
    append_history, history_file, load_history, load_skills, now_epoch_secs, save_history,
    save_skills, skills_file, CommitEntry,
};
