use serde::Deserialize;

use super::sampler::MAX_WORDS;
use crate::ModelError;

/// Parameters of a batch of generated sentences.
///
/// Deserializable so drivers can read it straight from a query string or a
/// config file; unset fields fall back to their defaults.
///
/// # Invariants
/// - `max_words >= 2` once `validate` succeeded
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
	/// Maximum number of words of one sentence.
	pub max_words: usize,

	/// Number of sentences to generate.
	pub sentence_count: usize,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self { max_words: MAX_WORDS, sentence_count: 1 }
	}
}

impl GenerationConfig {
	/// Creates a config for `sentence_count` sentences with the default cap.
	pub fn new(sentence_count: usize) -> Self {
		Self { sentence_count, ..Self::default() }
	}

	/// Checks the values can drive a generation.
	///
	/// # Errors
	/// Returns `ModelError::InvalidConfig` if `max_words < 2`.
	pub fn validate(&self) -> Result<(), ModelError> {
		if self.max_words < 2 {
			return Err(ModelError::InvalidConfig(format!(
				"max_words must be >= 2, got {}",
				self.max_words
			)));
		}
		Ok(())
	}
}
