use std::collections::HashMap;
use std::iter;

use rand::Rng;

/// Ordered histogram of observed tokens.
///
/// Each distinct token is stored once with the number of times it was
/// observed, in order of first observation. Sampling is weighted by the
/// occurrence counts, which draws from the same distribution as picking
/// uniformly from a list holding every observation.
///
/// ## Invariants
/// - Each occurrence count is strictly positive
/// - `total` is the sum of all occurrence counts
#[derive(Clone, Debug, Default)]
pub struct Occurrences {
	/// Distinct tokens with their counts, in first-seen order.
	entries: Vec<(String, usize)>,
	/// Position of each token in `entries`.
	index: HashMap<String, usize>,
	total: usize,
}

impl Occurrences {
	/// Creates an empty histogram.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one observation of `token`.
	pub fn add(&mut self, token: &str) {
		match self.index.get(token) {
			Some(&position) => self.entries[position].1 += 1,
			None => {
				self.index.insert(token.to_owned(), self.entries.len());
				self.entries.push((token.to_owned(), 1));
			}
		}
		self.total += 1;
	}

	/// Picks a token with probability proportional to its count.
	///
	/// Returns `None` if nothing was recorded.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..self.total);
		for (token, occurrence) in &self.entries {
			if r < *occurrence {
				return Some(token);
			}
			r -= occurrence;
		}

		// Unreachable while `total` matches the entries.
		None
	}

	/// Number of distinct tokens.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if nothing was recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Total number of observations.
	pub fn total(&self) -> usize {
		self.total
	}

	/// How many times `token` was observed.
	pub fn count(&self, token: &str) -> usize {
		self.index.get(token).map_or(0, |&position| self.entries[position].1)
	}

	/// Distinct tokens with their counts, in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.entries.iter().map(|(token, occurrence)| (token.as_str(), *occurrence))
	}

	/// Every observation in first-seen order, one item per occurrence.
	///
	/// Example: `{"cat" => 2, "dog" => 1}` yields `cat, cat, dog`.
	pub fn expanded(&self) -> impl Iterator<Item = &str> {
		self.iter().flat_map(|(token, occurrence)| iter::repeat_n(token, occurrence))
	}
}

/// A state in the bigram chain.
///
/// A `State` corresponds to one token (`key`) and stores every token
/// observed immediately after it in the training text. Conceptually this is
/// a node of a Markov chain whose outgoing edges are weighted by their
/// number of observations.
///
/// ## Invariants
/// - A state stored in a model has at least one successor
#[derive(Clone, Debug)]
pub struct State {
	key: String,
	successors: Occurrences,
}

impl State {
	/// Creates a state for `key` with no successors yet.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			successors: Occurrences::new(),
		}
	}

	/// The token this state stands for.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Records an occurrence of a transition toward `next`.
	pub fn add_transition(&mut self, next: &str) {
		self.successors.add(next);
	}

	/// Observed successors of this token.
	pub fn successors(&self) -> &Occurrences {
		&self.successors
	}

	/// Draws the next token, weighted by observation count.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.successors.choose(rng)
	}
}
