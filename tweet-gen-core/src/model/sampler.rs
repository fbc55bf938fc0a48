use std::fmt;

use log::{trace, warn};
use rand::Rng;

use super::frozen::Model;
use super::generation_config::GenerationConfig;
use super::word::{Word, WordId};
use crate::ModelError;

/// Default cap on the number of words of a generated sentence.
pub const MAX_WORDS: usize = 20;

/// A generated sentence: the texts of the emitted words, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
	words: Vec<String>,
}

impl Sentence {
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Number of emitted words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// `true` if the last word carries its own line break.
	pub fn ends_with_line_break(&self) -> bool {
		self.words.last().is_some_and(|w| w.ends_with('\n'))
	}
}

/// Words joined by single spaces, exactly as ingested.
impl fmt::Display for Sentence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.words.join(" "))
	}
}

/// Draws a uniformly random word able to open a sentence.
///
/// This is rejection sampling over the whole registry: indices are drawn in
/// `[0, len)` until the word is non-terminal and has at least one successor.
/// The model is checked beforehand, so the loop ends with probability 1.
///
/// # Errors
/// - `ModelError::EmptyModel` if no word was ingested.
/// - `ModelError::NoStartWordAvailable` if every word is terminal or a dead end.
pub fn pick_start<R: Rng + ?Sized>(model: &Model, rng: &mut R) -> Result<WordId, ModelError> {
	if model.is_empty() {
		return Err(ModelError::EmptyModel);
	}
	if model.viable_starts() == 0 {
		return Err(ModelError::NoStartWordAvailable);
	}

	loop {
		let index = rng.random_range(0..model.len());
		// Should not fail, index < len
		if let Some(word) = model.registry().get(index) {
			if word.is_viable_start() {
				return Ok(WordId(index));
			}
		}
	}
}

/// Draws the successor of `word`, weighted by observed frequency.
///
/// A draw `r` is taken in `[0, total)` and matched against the running
/// frequency sum with `>=`, see `Word::successor_for_draw`.
///
/// Returns `None` if `word` has no successors.
pub fn pick_next<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> Option<WordId> {
	let total = word.total_frequency();
	if total == 0 {
		return None;
	}
	let r = rng.random_range(0..total);
	word.successor_for_draw(r)
}

/// Generates one sentence of at most `max_words` words.
///
/// # Behavior
/// - Opens with `pick_start`, then chains `pick_next`.
/// - Stops after emitting a terminal word (stop symbol or line break).
/// - Stops once `max_words` words were emitted; no terminator is forced.
/// - Stops early on a word without successors.
///
/// Every sentence holds at least two words.
///
/// # Errors
/// - `ModelError::InvalidConfig` if `max_words < 2`.
/// - Any error of `pick_start`.
pub fn generate_sentence<R: Rng + ?Sized>(model: &Model, rng: &mut R, max_words: usize) -> Result<Sentence, ModelError> {
	if max_words < 2 {
		return Err(ModelError::InvalidConfig(format!("max_words must be >= 2, got {max_words}")));
	}

	let mut current = pick_start(model, rng)?;
	let mut words = vec![model.word(current).text().to_owned()];

	while words.len() < max_words {
		let Some(next) = pick_next(model.word(current), rng) else {
			warn!("dead end on {:?} after {} words", model.word(current).text(), words.len());
			break;
		};

		let next_word = model.word(next);
		words.push(next_word.text().to_owned());
		if next_word.is_terminal() {
			break;
		}
		current = next;
	}

	trace!("generated sentence of {} words", words.len());
	Ok(Sentence { words })
}

/// Generates `config.sentence_count` sentences in a row from one random source.
///
/// # Errors
/// Returns the first error of `GenerationConfig::validate` or `generate_sentence`.
pub fn generate_sentences<R: Rng + ?Sized>(model: &Model, rng: &mut R, config: &GenerationConfig) -> Result<Vec<Sentence>, ModelError> {
	config.validate()?;
	(0..config.sentence_count)
		.map(|_| generate_sentence(model, rng, config.max_words))
		.collect()
}
