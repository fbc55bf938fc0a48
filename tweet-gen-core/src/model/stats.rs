use serde::Serialize;

use super::registry::Registry;

/// Aggregated figures describing a model.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModelStats {
	/// Number of registered words.
	pub distinct_words: usize,
	/// Sum of every word occurrence.
	pub tokens: usize,
	/// Words ending a sentence.
	pub terminal_words: usize,
	/// Sum of every edge frequency.
	pub transitions: usize,
}

impl ModelStats {
	pub fn from_registry(registry: &Registry) -> Self {
		registry.iter().fold(
			Self { distinct_words: registry.len(), ..Self::default() },
			|mut stats, (_, word)| {
				stats.tokens += word.occurrences();
				stats.transitions += word.total_frequency();
				if word.is_terminal() {
					stats.terminal_words += 1;
				}
				stats
			},
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{WordBudget, ingest::ingest};

	#[test]
	fn figures_match_corpus() {
		let mut registry = Registry::new();
		ingest(&mut registry, &b"the cat sat.\nthe dog ran.\n"[..], WordBudget::Unbounded).unwrap();

		let stats = ModelStats::from_registry(&registry);
		assert_eq!(
			stats,
			ModelStats { distinct_words: 5, tokens: 6, terminal_words: 2, transitions: 4 }
		);
	}
}
