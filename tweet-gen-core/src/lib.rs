//! Word-level Markov chain text generation library.
//!
//! This crate provides a first-order Markov "tweet" generator including:
//! - A word registry storing every distinct token once
//! - Per-word successor frequency tables
//! - A streaming corpus ingestor with an optional distinct-word budget
//! - Frequency-weighted sentence sampling driven by an explicit random source
//!
//! Low-level I/O helpers are kept internal.

/// Word registry, ingestion and sentence sampling.
///
/// Exposes the frozen `Model`, the sampling functions and the
/// multi-corpus `Generator`.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// I/O utilities (corpus discovery, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::ModelError;
