use rand::Rng;
use rand::seq::IndexedRandom;

use super::bigram_model::{BigramModel, is_sentence_terminal, starts_uppercase};
use super::generation_input::GenerationInput;

/// Token used to open a walk when the model knows nothing at all.
pub const DEFAULT_START: &str = "The";

/// Picks the token that opens a walk.
///
/// # Behavior
/// - Draws from the starter pool (weighted by frequency) when it is non-empty.
/// - Otherwise draws uniformly among capitalized keys of the transition
///   table, or among all keys if none is capitalized.
/// - Falls back to [`DEFAULT_START`] on an empty model.
pub fn choose_start<R: Rng + ?Sized>(model: &BigramModel, rng: &mut R) -> String {
	if let Some(starter) = model.starters().choose(rng) {
		return starter.to_owned();
	}

	let capitalized: Vec<&str> = model.keys().filter(|key| starts_uppercase(key)).collect();
	let candidates: Vec<&str> = if capitalized.is_empty() {
		model.keys().collect()
	} else {
		capitalized
	};

	candidates
		.choose(rng)
		.map_or_else(|| DEFAULT_START.to_owned(), |key| (*key).to_owned())
}

/// Random walk over the transition table.
///
/// # Returns
/// The visited tokens, start token included. The sequence holds at most
/// `input.max_length()` tokens.
///
/// # Behavior
/// - Stops when the current token has no successor (dead end).
/// - Once the sequence holds `input.min_length` tokens or more, stops right
///   after appending a token that ends a sentence. Sentence ends seen before
///   that point do not stop the walk.
pub fn walk<R: Rng + ?Sized>(model: &BigramModel, input: &GenerationInput, rng: &mut R) -> Vec<String> {
	let start = choose_start(model, rng);
	log::debug!("walk starts at {start:?}");

	let mut tokens = vec![start];
	for _ in 1..input.max_length() {
		// Should not panic, `tokens` is never empty
		let current = &tokens[tokens.len() - 1];
		let next = match model.state(current).and_then(|state| state.predict(rng)) {
			Some(next) => next.to_owned(),
			None => {
				log::debug!("dead end after {} tokens", tokens.len());
				break;
			}
		};

		let ends_sentence = is_sentence_terminal(&next);
		tokens.push(next);

		if tokens.len() >= input.min_length && ends_sentence {
			break;
		}
	}

	tokens
}
