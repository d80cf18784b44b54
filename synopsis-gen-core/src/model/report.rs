use std::fmt;

use serde::{Deserialize, Serialize};

use super::bigram_model::BigramModel;

/// Maximum number of successors listed per key in a preview.
pub const PREVIEW_SUCCESSORS: usize = 10;

/// Aggregate counts over a trained model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStats {
	/// Number of distinct keys in the transition table.
	pub unique_words: usize,

	/// Number of recorded transitions, duplicates included.
	pub total_transitions: usize,

	/// Number of distinct sentence starters.
	pub sentence_starters: usize,
}

impl ModelStats {
	/// Computes the counts of `model`.
	pub fn of(model: &BigramModel) -> Self {
		Self {
			unique_words: model.states().len(),
			total_transitions: model.total_transitions(),
			sentence_starters: model.starters().len(),
		}
	}
}

impl fmt::Display for ModelStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Unique words: {}", self.unique_words)?;
		writeln!(f, "Total word transitions: {}", self.total_transitions)?;
		write!(f, "Sentence starters: {}", self.sentence_starters)
	}
}

/// Renders the first `sample_size` keys of the transition table.
///
/// One line per key, in first-seen order:
/// `"key": ["next", "next", ...]`. At most [`PREVIEW_SUCCESSORS`]
/// successors are listed, followed by `...` when some were left out.
pub fn preview(model: &BigramModel, sample_size: usize) -> String {
	let mut lines = Vec::new();

	for state in model.states().iter().take(sample_size) {
		let successors = state.successors();
		let listed = successors
			.expanded()
			.take(PREVIEW_SUCCESSORS)
			.map(|token| format!("{token:?}"))
			.collect::<Vec<_>>()
			.join(", ");
		let ellipsis = if successors.total() > PREVIEW_SUCCESSORS { "..." } else { "" };

		lines.push(format!("{:?}: [{listed}]{ellipsis}", state.key()));
	}

	lines.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_stats() {
		let model = BigramModel::build("The cat sat. The dog ran.");
		let stats = ModelStats::of(&model);

		assert_eq!(
			stats,
			ModelStats {
				unique_words: 4,
				total_transitions: 5,
				sentence_starters: 1,
			}
		);
		assert_eq!(
			stats.to_string(),
			"Unique words: 4\nTotal word transitions: 5\nSentence starters: 1"
		);
	}

	#[test]
	fn test_stats_of_empty_model() {
		assert_eq!(ModelStats::of(&BigramModel::default()), ModelStats::default());
	}

	#[test]
	fn test_preview() {
		let model = BigramModel::build("The cat sat. The dog ran.");

		assert_eq!(
			preview(&model, 2),
			"\"The\": [\"cat\", \"dog\"]\n\"cat\": [\"sat.\"]"
		);
		assert_eq!(preview(&model, 0), "");
		assert_eq!(preview(&model, 100).lines().count(), 4);
	}

	#[test]
	fn test_preview_truncates_successors() {
		let text = "x a x b x c x d x e x f x g x h x i x j x k x l";
		let model = BigramModel::build(text);

		let first_line = preview(&model, 1);
		assert!(first_line.starts_with("\"x\": [\"a\", \"b\""));
		assert!(first_line.ends_with("\"j\"]..."));
	}
}
