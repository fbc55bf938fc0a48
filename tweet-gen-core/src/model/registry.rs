use std::collections::HashMap;

use super::word::{Transition, Word, WordId};
use crate::ModelError;

/// Insertion-ordered store of every distinct word of a corpus.
///
/// The registry exclusively owns its words; everything else refers to them
/// through `WordId` handles, which lets the successor graph contain cycles.
///
/// # Responsibilities
/// - Register each distinct token once
/// - Look words up by exact text
/// - Record transitions between registered words
///
/// # Invariants
/// - `index` maps every `words[i].text()` to `WordId(i)` and nothing else
/// - Two words never share the same text (case-sensitive)
#[derive(Default, Clone, Debug)]
pub struct Registry {
	words: Vec<Word>,
	index: HashMap<String, WordId>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Exact-match lookup by token text.
	pub fn find(&self, text: &str) -> Option<WordId> {
		self.index.get(text).copied()
	}

	/// Registers a word that has never been seen.
	///
	/// The new word starts with one occurrence and no successors; its
	/// terminal flag is derived from its last character.
	///
	/// # Errors
	/// Returns `ModelError::DuplicateWord` if `text` is already registered.
	/// Callers are expected to `find` first.
	pub fn insert_new(&mut self, text: &str) -> Result<WordId, ModelError> {
		if self.index.contains_key(text) {
			return Err(ModelError::DuplicateWord(text.to_owned()));
		}

		let id = WordId(self.words.len());
		self.words.push(Word::new(text));
		self.index.insert(text.to_owned(), id);
		Ok(id)
	}

	/// Returns the handle of `text`, registering it or counting one more
	/// occurrence. The boolean is `true` when the word was just inserted.
	pub(crate) fn observe(&mut self, text: &str) -> Result<(WordId, bool), ModelError> {
		match self.find(text) {
			Some(id) => {
				self.words[id.0].add_occurrence();
				Ok((id, false))
			}
			None => Ok((self.insert_new(text)?, true)),
		}
	}

	/// Records that `target` directly followed `source`.
	///
	/// # Errors
	/// Returns `ModelError::TerminalSource` if `source` ends a sentence.
	///
	/// # Panics
	/// Panics if either handle was not issued by this registry.
	pub fn record_transition(&mut self, source: WordId, target: WordId) -> Result<Transition, ModelError> {
		let len = self.words.len();
		assert!(source.0 < len && target.0 < len, "foreign word handle");
		self.words[source.0].record_transition(target)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Returns the word behind `id`.
	///
	/// # Panics
	/// Panics if `id` was not issued by this registry.
	pub fn word(&self, id: WordId) -> &Word {
		&self.words[id.0]
	}

	/// Returns the word at insertion position `index`, if any.
	pub fn get(&self, index: usize) -> Option<&Word> {
		self.words.get(index)
	}

	/// Iterates over words in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
		self.words.iter().enumerate().map(|(i, w)| (WordId(i), w))
	}
}
