//! Command-line interface for the `nexr` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `nexr` library crate.

fn main() -> anyhow::Result<()> {
    nexr::run()
}
