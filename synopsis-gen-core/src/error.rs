//! Error types shared by the synopsis generator.

/// Errors raised by training, parameter validation and corpus I/O.
///
/// An empty model or a dead end during a walk are not errors: generation
/// falls back to a fixed sentence or stops early instead.
#[derive(Debug, thiserror::Error)]
pub enum SynopsisError {
	/// Training input is not valid text.
	#[error("invalid training input: {0}")]
	InvalidInput(String),

	/// Generation was asked for sequences of zero tokens.
	#[error("max_length must be >= 1, got {max_length}")]
	InvalidLength {
		/// The rejected maximum length.
		max_length: usize,
	},

	/// A requested corpus does not exist.
	#[error("unknown corpus: {0}")]
	UnknownCorpus(String),

	/// I/O error while reading a corpus.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Result type for synopsis generator operations.
pub type SynopsisResult<T> = Result<T, SynopsisError>;
