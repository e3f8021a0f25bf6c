//! Evidence corpus types and collection sources for nexr skill analysis.
//!
//! This crate provides:
//! - Typed evidence records (projects and contributions) with citation text
//! - A corpus container loaded from JSON exports or assembled in memory
//! - The [`EvidenceSource`] trait for pluggable asynchronous collection
//! - Static and simulated sources for deterministic pipelines and demos

#![deny(unsafe_code)]

pub mod source;
pub mod types;

pub use source::{EvidenceError, EvidenceSource, SimulatedSource, StaticSource};
pub use types::{load_corpus, EvidenceCorpus, EvidenceKind, EvidenceRecord};
