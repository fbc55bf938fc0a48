use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::ingest::{IngestReport, WordBudget, ingest};
use super::registry::Registry;
use super::stats::ModelStats;
use super::word::{Word, WordId};

use crate::ModelError;

/// Immutable word chain ready for sampling.
///
/// A `Model` is the registry left behind by ingestion, frozen: no method
/// mutates it, so one instance can be shared read-only between threads.
///
/// # Invariants
/// - `viable_starts` is the number of non-terminal words with successors
#[derive(Clone, Debug)]
pub struct Model {
	registry: Registry,
	viable_starts: usize,
}

impl Model {
	/// Freezes a populated registry.
	pub fn freeze(registry: Registry) -> Self {
		let viable_starts = registry.iter().filter(|(_, w)| w.is_viable_start()).count();
		Self { registry, viable_starts }
	}

	/// Ingests a whole stream and freezes the result.
	pub fn from_reader<R: BufRead>(reader: R, budget: WordBudget) -> Result<(Self, IngestReport), ModelError> {
		let mut registry = Registry::new();
		let report = ingest(&mut registry, reader, budget)?;
		Ok((Self::freeze(registry), report))
	}

	/// Opens a corpus file and builds its model.
	///
	/// # Errors
	/// Returns `ModelError::Io` if the file cannot be opened or read.
	pub fn from_file<P: AsRef<Path>>(path: P, budget: WordBudget) -> Result<(Self, IngestReport), ModelError> {
		let path = path.as_ref();
		let file = File::open(path)?;
		let built = Self::from_reader(BufReader::new(file), budget)?;
		debug!("built model from {}: {} words", path.display(), built.0.len());
		Ok(built)
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn word(&self, id: WordId) -> &Word {
		self.registry.word(id)
	}

	pub fn len(&self) -> usize {
		self.registry.len()
	}

	pub fn is_empty(&self) -> bool {
		self.registry.is_empty()
	}

	/// Number of words `pick_start` may return.
	pub fn viable_starts(&self) -> usize {
		self.viable_starts
	}

	pub fn stats(&self) -> ModelStats {
		ModelStats::from_registry(&self.registry)
	}
}
