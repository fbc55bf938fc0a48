use std::io::BufRead;

use log::{info, warn};

use super::registry::Registry;
use super::word::WordId;
use crate::ModelError;

/// Token delimiter. Runs of it are collapsed; no other whitespace splits.
const DELIMITER: char = ' ';

/// Cap on the number of distinct words an ingestion may insert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordBudget {
	/// Read the whole stream.
	#[default]
	Unbounded,
	/// Stop as soon as this many new words have been inserted.
	Limited(usize),
}

impl WordBudget {
	fn is_exhausted(self, inserted: usize) -> bool {
		match self {
			WordBudget::Unbounded => false,
			WordBudget::Limited(limit) => inserted >= limit,
		}
	}
}

/// `0` means unbounded, any other value caps distinct insertions.
impl From<usize> for WordBudget {
	fn from(value: usize) -> Self {
		if value == 0 { WordBudget::Unbounded } else { WordBudget::Limited(value) }
	}
}

/// Summary of a single ingestion pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestReport {
	/// Lines read, including skipped blank ones and the one cut by the budget.
	pub lines: usize,
	/// Tokens processed.
	pub tokens: usize,
	/// Words newly inserted by this pass.
	pub distinct_words: usize,
	/// `true` if the budget stopped ingestion before the end of the stream.
	pub budget_exhausted: bool,
}

/// Splits a line into tokens.
///
/// Only the space character delimits; tokens keep embedded punctuation and
/// the last one keeps the line break. A line holding nothing but whitespace
/// yields no tokens.
fn tokenize(line: &str) -> impl Iterator<Item = &str> {
	let blank = line.trim().is_empty();
	line.split(DELIMITER).filter(move |token| !blank && !token.is_empty())
}

/// Reads a corpus into `registry`, line by line.
///
/// For each token:
/// - registers it, or counts one more occurrence if already known
/// - records a transition from the previous token of the same line,
///   unless that previous token ends a sentence
///
/// Line boundaries are hard breaks: the last token of a line is never
/// linked to the first token of the next one.
///
/// With `WordBudget::Limited(n)` ingestion stops before the first token
/// read after the `n`-th insertion, even in the middle of a line.
///
/// # Errors
/// Returns `ModelError::Io` if reading fails. Invalid UTF-8 is replaced,
/// not rejected.
pub fn ingest<R: BufRead>(registry: &mut Registry, mut reader: R, budget: WordBudget) -> Result<IngestReport, ModelError> {
	let mut report = IngestReport::default();
	let mut buf = Vec::new();

	'lines: loop {
		buf.clear();
		if reader.read_until(b'\n', &mut buf)? == 0 {
			break;
		}
		report.lines += 1;
		let line = String::from_utf8_lossy(&buf);

		let mut previous: Option<WordId> = None;
		for token in tokenize(&line) {
			if budget.is_exhausted(report.distinct_words) {
				report.budget_exhausted = true;
				break 'lines;
			}

			let (current, inserted) = registry.observe(token)?;
			report.tokens += 1;
			if inserted {
				report.distinct_words += 1;
			}

			if let Some(prev) = previous {
				if !registry.word(prev).is_terminal() {
					registry.record_transition(prev, current)?;
				}
			}
			previous = Some(current);
		}
	}

	if report.budget_exhausted {
		warn!(
			"word budget of {} reached after {} lines, rest of the corpus ignored",
			report.distinct_words, report.lines
		);
	}
	info!(
		"ingested {} tokens over {} lines, {} new words",
		report.tokens, report.lines, report.distinct_words
	);

	Ok(report)
}
