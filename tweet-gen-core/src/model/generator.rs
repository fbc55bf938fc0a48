use std::collections::HashMap;
use std::io;
use std::path::Path;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::frozen::Model;
use super::generation_config::GenerationConfig;
use super::ingest::WordBudget;
use super::sampler::{Sentence, generate_sentences};
use super::stats::ModelStats;
use crate::{ModelError, io as corpus_io};

/// High-level generator managing several named corpora.
///
/// # Responsibilities
/// - Load every corpus of a folder into its own frozen `Model`
/// - Generate seeded batches of sentences from a chosen corpus
///
/// Generation never mutates the generator, so a single instance can serve
/// concurrent callers behind a shared reference.
#[derive(Debug, Default)]
pub struct Generator {
	models: HashMap<String, Model>,
}

impl Generator {
	/// Extension of the corpus files picked up by `new`.
	pub const CORPUS_EXTENSION: &'static str = "txt";

	/// Creates a generator by loading all `.txt` corpora from a directory.
	///
	/// # Parameters
	/// - `folder`: Directory containing corpus files.
	///   Both `"folder"` and `"folder/"` are accepted.
	/// - `budget`: Distinct-word budget applied to each corpus separately.
	///
	/// # Behavior
	/// - The corpus name is the file name without extension.
	/// - Only files directly contained in the directory are loaded
	///   (subdirectories are ignored).
	///
	/// # Errors
	/// - `ModelError::Io` if the path is not a directory or a corpus fails to load.
	pub fn new<P: AsRef<Path>>(folder: P, budget: WordBudget) -> Result<Self, ModelError> {
		let folder = corpus_io::normalize_folder(folder.as_ref());
		if !folder.is_dir() {
			return Err(io::Error::new(
				io::ErrorKind::InvalidInput,
				format!("Expected a directory, got: {}", folder.display()),
			)
			.into());
		}

		let mut generator = Self::default();
		for file in corpus_io::list_files(&folder, Self::CORPUS_EXTENSION)? {
			generator.load_model(folder.join(&file), budget)?;
		}

		info!("loaded {} corpora from {}", generator.models.len(), folder.display());
		Ok(generator)
	}

	/// Creates a generator holding a single, already built model.
	pub fn from_model(name: &str, model: Model) -> Self {
		let mut models = HashMap::new();
		models.insert(name.to_owned(), model);
		Self { models }
	}

	/// Loads one corpus file under its file stem.
	///
	/// # Errors
	/// Returns `ModelError::Io` if the file cannot be read.
	fn load_model<P: AsRef<Path>>(&mut self, path: P, budget: WordBudget) -> Result<(), ModelError> {
		let path = path.as_ref();
		let name = corpus_io::get_filename(path)?;
		let (model, report) = Model::from_file(path, budget)?;
		debug!("corpus {name}: {} lines, {} words", report.lines, model.len());
		self.models.insert(name, model);
		Ok(())
	}

	/// Returns the names of the loaded corpora, sorted.
	pub fn corpus_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.models.keys().cloned().collect();
		names.sort();
		names
	}

	/// Returns the model of corpus `name`.
	///
	/// # Errors
	/// Returns `ModelError::UnknownCorpus` if no such corpus is loaded.
	pub fn model(&self, name: &str) -> Result<&Model, ModelError> {
		self.models.get(name).ok_or_else(|| ModelError::UnknownCorpus(name.to_owned()))
	}

	pub fn stats(&self, name: &str) -> Result<ModelStats, ModelError> {
		Ok(self.model(name)?.stats())
	}

	/// Generates a batch of sentences from corpus `name`.
	///
	/// The random source is seeded with `seed` for this call only: the same
	/// seed, corpus and config always produce the same sentences.
	pub fn generate(&self, name: &str, seed: u64, config: &GenerationConfig) -> Result<Vec<Sentence>, ModelError> {
		let model = self.model(name)?;
		let mut rng = StdRng::seed_from_u64(seed);
		generate_sentences(model, &mut rng, config)
	}
}
