use std::io;

use thiserror::Error;

/// Errors raised while building or sampling a word model.
///
/// `DuplicateWord` and `TerminalSource` signal a broken internal contract
/// (the ingestor never triggers them); the others are runtime conditions.
#[derive(Debug, Error)]
pub enum ModelError {
	#[error("io error: {0}")]
	Io(#[from] io::Error),

	#[error("word {0:?} is already registered")]
	DuplicateWord(String),

	#[error("terminal word {0:?} cannot record outgoing transitions")]
	TerminalSource(String),

	#[error("the model holds no word that can start a sentence")]
	NoStartWordAvailable,

	#[error("the model is empty")]
	EmptyModel,

	#[error("unknown corpus: {0}")]
	UnknownCorpus(String),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}
