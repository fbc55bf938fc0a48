use crate::ModelError;

/// Character marking the end of a sentence.
pub const STOP_SYMBOL: char = '.';

/// Line break kept on the last token of a line.
pub const LINE_BREAK: char = '\n';

/// Returns `true` if `text` ends a sentence (stop symbol or line break).
pub fn is_terminal_text(text: &str) -> bool {
	text.ends_with([STOP_SYMBOL, LINE_BREAK])
}

/// Stable handle of a word inside its `Registry`.
///
/// Handles are plain indices in insertion order; they are only meaningful
/// for the registry that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub(crate) usize);

impl WordId {
	/// Insertion index of the word.
	pub fn index(self) -> usize {
		self.0
	}
}

/// Outgoing edge of a word: how many times `target` directly followed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Successor {
	pub target: WordId,
	pub frequency: usize,
}

/// Outcome of `Word::record_transition`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
	/// An existing edge had its frequency increased.
	Incremented,
	/// A new edge was appended with a frequency of 1.
	Inserted,
}

/// A distinct token of the corpus.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - `successors` holds at most one edge per target
/// - Each edge frequency is strictly positive
/// - A terminal word never gains successors
#[derive(Clone, Debug)]
pub struct Word {
	/// Exact token, trailing punctuation and line break included.
	text: String,
	/// How many times this token appeared in the corpus.
	occurrences: usize,
	is_terminal: bool,
	/// Edges in first-observed order.
	successors: Vec<Successor>,
}

impl Word {
	/// Creates a word seen once, with no successors.
	pub(crate) fn new(text: &str) -> Self {
		Self {
			text: text.to_owned(),
			occurrences: 1,
			is_terminal: is_terminal_text(text),
			successors: Vec::new(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn occurrences(&self) -> usize {
		self.occurrences
	}

	pub fn is_terminal(&self) -> bool {
		self.is_terminal
	}

	pub fn successors(&self) -> &[Successor] {
		&self.successors
	}

	/// A word can open a sentence if it is not terminal and leads somewhere.
	pub fn is_viable_start(&self) -> bool {
		!self.is_terminal && !self.successors.is_empty()
	}

	/// Sum of the frequencies of every outgoing edge.
	pub fn total_frequency(&self) -> usize {
		self.successors.iter().map(|s| s.frequency).sum()
	}

	pub(crate) fn add_occurrence(&mut self) {
		self.occurrences += 1;
	}

	/// Records that `target` directly followed this word.
	///
	/// - If the edge already exists, its frequency is increased.
	/// - Otherwise, a new edge is appended with a frequency of 1.
	///
	/// # Errors
	/// Returns `ModelError::TerminalSource` if this word ends a sentence.
	pub(crate) fn record_transition(&mut self, target: WordId) -> Result<Transition, ModelError> {
		if self.is_terminal {
			return Err(ModelError::TerminalSource(self.text.clone()));
		}

		match self.successors.iter_mut().find(|s| s.target == target) {
			Some(edge) => {
				edge.frequency += 1;
				Ok(Transition::Incremented)
			}
			None => {
				self.successors.push(Successor { target, frequency: 1 });
				Ok(Transition::Inserted)
			}
		}
	}

	/// Selects the successor matching the draw `r`, taken in `[0, total)`.
	///
	/// Walks the edges accumulating their frequencies and returns the first
	/// one whose running sum is `>= r`. A draw of 0 therefore always lands
	/// on the first-inserted edge.
	///
	/// Returns `None` if the word has no successors.
	pub fn successor_for_draw(&self, r: usize) -> Option<WordId> {
		let mut cumulative = 0;
		for edge in &self.successors {
			cumulative += edge.frequency;
			if cumulative >= r {
				return Some(edge.target);
			}
		}

		// Only reachable with r >= total, which callers never draw
		self.successors.last().map(|s| s.target)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn word_with_edges(edges: &[(usize, usize)]) -> Word {
		let mut word = Word::new("from");
		for &(target, frequency) in edges {
			for _ in 0..frequency {
				word.record_transition(WordId(target)).unwrap();
			}
		}
		word
	}

	#[test]
	fn terminal_classification() {
		assert!(Word::new("sat.").is_terminal());
		assert!(Word::new("ran\n").is_terminal());
		assert!(Word::new("ran.\n").is_terminal());
		assert!(!Word::new("the").is_terminal());
		assert!(!Word::new("e.g,").is_terminal());
		assert!(!Word::new("end\t").is_terminal());
	}

	#[test]
	fn record_transition_inserts_then_increments() {
		let mut word = Word::new("the");
		assert_eq!(word.record_transition(WordId(1)).unwrap(), Transition::Inserted);
		assert_eq!(word.record_transition(WordId(2)).unwrap(), Transition::Inserted);
		assert_eq!(word.record_transition(WordId(1)).unwrap(), Transition::Incremented);

		assert_eq!(
			word.successors(),
			&[
				Successor { target: WordId(1), frequency: 2 },
				Successor { target: WordId(2), frequency: 1 },
			]
		);
		assert_eq!(word.total_frequency(), 3);
	}

	#[test]
	fn terminal_word_rejects_transitions() {
		let mut word = Word::new("end.");
		assert!(matches!(
			word.record_transition(WordId(0)),
			Err(ModelError::TerminalSource(text)) if text == "end."
		));
		assert!(word.successors().is_empty());
	}

	#[test]
	fn zero_draw_picks_first_edge_even_when_rare() {
		let word = word_with_edges(&[(7, 1), (8, 50)]);
		assert_eq!(word.successor_for_draw(0), Some(WordId(7)));
	}

	#[test]
	fn draw_uses_inclusive_cumulative_boundary() {
		// cumulative sums: 2, 5
		let word = word_with_edges(&[(1, 2), (2, 3)]);
		assert_eq!(word.successor_for_draw(1), Some(WordId(1)));
		assert_eq!(word.successor_for_draw(2), Some(WordId(1)));
		assert_eq!(word.successor_for_draw(3), Some(WordId(2)));
		assert_eq!(word.successor_for_draw(4), Some(WordId(2)));
	}

	#[test]
	fn no_successors_yields_none() {
		assert_eq!(Word::new("lonely").successor_for_draw(0), None);
	}
}
