//! Top-level module for the word-chain generation system.
//!
//! This module groups:
//! - The word entity and its successor edges (`Word`, `Successor`)
//! - The insertion-ordered word store (`Registry`)
//! - Corpus ingestion (`ingest`, `WordBudget`)
//! - The frozen, shareable model (`Model`)
//! - Random sampling of sentences (`sampler`)
//! - Generation parameters (`GenerationConfig`)
//! - A high-level multi-corpus interface (`Generator`)

/// A distinct token and its outgoing transitions.
pub mod word;

/// Insertion-ordered collection owning every `Word`.
pub mod registry;

/// Streaming construction of a registry from a text corpus.
pub mod ingest;

/// Read-only model built once ingestion is done.
///
/// Safe to share between threads; sampling never mutates it.
pub mod frozen;

/// Start-word and successor sampling, composed into sentence generation.
pub mod sampler;

/// Generation parameters (sentence cap, number of sentences).
pub mod generation_config;

/// Aggregated figures describing a built model.
pub mod stats;

/// High-level interface over several named corpora.
///
/// Loads a folder of corpora and generates seeded batches of sentences.
pub mod generator;

pub use frozen::Model;
pub use generation_config::GenerationConfig;
pub use generator::Generator;
pub use ingest::{IngestReport, WordBudget};
pub use registry::Registry;
pub use sampler::Sentence;
pub use stats::ModelStats;
pub use word::{Successor, Transition, Word, WordId};
