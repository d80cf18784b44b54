use std::collections::HashMap;

use super::state::{Occurrences, State};
use crate::error::{SynopsisError, SynopsisResult};

/// Characters that close a sentence.
pub const SENTENCE_TERMINALS: [char; 3] = ['.', '!', '?'];

/// Returns `true` if `token` ends with `.`, `!` or `?`.
pub fn is_sentence_terminal(token: &str) -> bool {
	token.ends_with(SENTENCE_TERMINALS)
}

/// Returns `true` if the first character of `token` is uppercase.
pub fn starts_uppercase(token: &str) -> bool {
	token.chars().next().is_some_and(char::is_uppercase)
}

/// Splits text into whitespace-delimited tokens.
///
/// Whitespace runs count as a single separator and leading/trailing
/// whitespace is ignored. Punctuation stays attached to its word.
pub fn tokenize(text: &str) -> Vec<&str> {
	text.split_whitespace().collect()
}

/// First-order (bigram) Markov model over word tokens.
///
/// The model stores, for every token seen in the training text, the tokens
/// that immediately followed it, plus a pool of tokens that opened a
/// sentence.
///
/// # Responsibilities
/// - Build the transition table and the sentence-starter pool from raw text
/// - Look up the state of a token during a walk
/// - Expose the keys in first-seen order
///
/// # Invariants
/// - Each key of `index` points to the state with the same key in `states`
/// - Every stored state has at least one successor
/// - Starters start with an uppercase character
#[derive(Clone, Debug, Default)]
pub struct BigramModel {
	/// States in order of first appearance of their key.
	states: Vec<State>,

	/// Mapping from a token to its position in `states`.
	index: HashMap<String, usize>,

	/// Tokens that opened a sentence, weighted by frequency.
	starters: Occurrences,
}

impl BigramModel {
	/// Builds a model from raw text.
	///
	/// # Behavior
	/// - Every adjacent pair of tokens records one transition.
	/// - A capitalized token following a token that ends a sentence is
	///   added to the starter pool, and so is the first token if capitalized.
	///
	/// Empty text yields an empty model. A single token yields an empty
	/// transition table but may still seed the starter pool.
	pub fn build(text: &str) -> Self {
		let tokens = tokenize(text);
		let mut model = Self::default();

		for pair in tokens.windows(2) {
			let (current, next) = (pair[0], pair[1]);
			model.add_transition(current, next);

			if is_sentence_terminal(current) && starts_uppercase(next) {
				model.starters.add(next);
			}
		}

		if let Some(first) = tokens.first() {
			if starts_uppercase(first) {
				model.starters.add(first);
			}
		}

		log::debug!(
			"trained on {} tokens: {} keys, {} transitions, {} starters",
			tokens.len(),
			model.states.len(),
			model.total_transitions(),
			model.starters.total()
		);

		model
	}

	/// Builds a model from raw bytes, rejecting anything that is not UTF-8.
	///
	/// # Errors
	/// Returns `SynopsisError::InvalidInput` before any tokenization happens.
	pub fn build_from_bytes(bytes: &[u8]) -> SynopsisResult<Self> {
		let text = std::str::from_utf8(bytes)
			.map_err(|e| SynopsisError::InvalidInput(e.to_string()))?;
		Ok(Self::build(text))
	}

	/// Records one observation of `next` following `current`.
	fn add_transition(&mut self, current: &str, next: &str) {
		let position = match self.index.get(current) {
			Some(&position) => position,
			None => {
				self.index.insert(current.to_owned(), self.states.len());
				self.states.push(State::new(current));
				self.states.len() - 1
			}
		};
		self.states[position].add_transition(next);
	}

	/// Returns the state of `token`, or `None` if it has no recorded successor.
	pub fn state(&self, token: &str) -> Option<&State> {
		self.index.get(token).map(|&position| &self.states[position])
	}

	/// Returns `true` if the transition table is empty.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// All states in first-seen order.
	pub fn states(&self) -> &[State] {
		&self.states
	}

	/// Keys of the transition table in first-seen order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.states.iter().map(State::key)
	}

	/// The sentence-starter pool.
	pub fn starters(&self) -> &Occurrences {
		&self.starters
	}

	/// Sum of all recorded transitions.
	pub fn total_transitions(&self) -> usize {
		self.states.iter().map(|state| state.successors().total()).sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn successors(model: &BigramModel, key: &str) -> Vec<String> {
		model
			.state(key)
			.map(|state| state.successors().expanded().map(str::to_owned).collect())
			.unwrap_or_default()
	}

	#[test]
	fn test_tokenize_collapses_whitespace() {
		assert_eq!(
			tokenize("  The\tcat \n\n sat.  "),
			vec!["The", "cat", "sat."]
		);
		assert!(tokenize("   \n\t").is_empty());
	}

	#[test]
	fn test_sentence_terminal() {
		assert!(is_sentence_terminal("end."));
		assert!(is_sentence_terminal("what?"));
		assert!(is_sentence_terminal("now!"));
		assert!(!is_sentence_terminal("comma,"));
		assert!(!is_sentence_terminal(""));
	}

	#[test]
	fn test_build_records_transitions_in_order() {
		let model = BigramModel::build("The cat sat. The dog ran.");

		assert_eq!(successors(&model, "The"), vec!["cat", "dog"]);
		assert_eq!(successors(&model, "sat."), vec!["The"]);
		assert!(model.state("ran.").is_none());
		assert_eq!(
			model.keys().collect::<Vec<_>>(),
			vec!["The", "cat", "sat.", "dog"]
		);
		assert_eq!(model.total_transitions(), 5);
	}

	#[test]
	fn test_build_keeps_duplicates_as_weight() {
		let model = BigramModel::build("a b a b a c");

		assert_eq!(successors(&model, "a"), vec!["b", "b", "c"]);
		assert_eq!(model.state("a").map(|s| s.successors().count("b")), Some(2));
	}

	#[test]
	fn test_starters() {
		let model = BigramModel::build("The cat sat. The dog ran. then Nothing! Loud noise? quiet");

		assert_eq!(model.starters().count("The"), 2);
		assert_eq!(model.starters().count("Loud"), 1);
		// "Nothing!" follows "then", which does not end a sentence.
		assert_eq!(model.starters().count("Nothing!"), 0);
		// "quiet" follows "noise?" but is not capitalized.
		assert_eq!(model.starters().count("quiet"), 0);
	}

	#[test]
	fn test_lowercase_first_token_is_not_a_starter() {
		let model = BigramModel::build("once upon a time");
		assert!(model.starters().is_empty());
		assert!(!model.is_empty());
	}

	#[test]
	fn test_empty_and_single_token() {
		let empty = BigramModel::build("");
		assert!(empty.is_empty());
		assert!(empty.starters().is_empty());

		let single = BigramModel::build("  Hello  ");
		assert!(single.is_empty());
		assert_eq!(single.starters().count("Hello"), 1);
	}

	#[test]
	fn test_build_from_bytes_rejects_invalid_utf8() {
		let result = BigramModel::build_from_bytes(&[0x54, 0x68, 0xff, 0xfe]);
		assert!(matches!(result, Err(SynopsisError::InvalidInput(_))));

		let model = BigramModel::build_from_bytes("Ça va. Très bien.".as_bytes()).unwrap();
		assert_eq!(model.starters().count("Ça"), 1);
		assert_eq!(model.starters().count("Très"), 1);
	}
}
