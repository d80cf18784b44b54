use crate::error::{SynopsisError, SynopsisResult};

/// Default maximum number of tokens in a synopsis.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Default number of tokens before a sentence end may stop the walk.
pub const DEFAULT_MIN_LENGTH: usize = 20;

/// Length constraints for a single generation.
///
/// # Invariants
/// - `max_length >= 1`
/// - `min_length` is unconstrained; a value above `max_length` simply means
///   that only `max_length` or a dead end can stop the walk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Upper bound on the number of tokens, start token included.
	max_length: usize,

	/// Sequence length from which a sentence-ending token stops the walk.
	pub min_length: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			max_length: DEFAULT_MAX_LENGTH,
			min_length: DEFAULT_MIN_LENGTH,
		}
	}
}

impl GenerationInput {
	/// Creates a validated set of length constraints.
	///
	/// # Errors
	/// Returns `SynopsisError::InvalidLength` if `max_length` is 0.
	pub fn new(max_length: usize, min_length: usize) -> SynopsisResult<Self> {
		let mut input = Self::default();
		input.set_max_length(max_length)?;
		input.min_length = min_length;
		Ok(input)
	}

	/// Returns the maximum sequence length.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Sets the maximum sequence length.
	///
	/// # Errors
	/// Returns an error if `max_length` is 0.
	pub fn set_max_length(&mut self, max_length: usize) -> SynopsisResult<()> {
		if max_length == 0 {
			return Err(SynopsisError::InvalidLength { max_length });
		}
		self.max_length = max_length;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let input = GenerationInput::default();
		assert_eq!(input.max_length(), 100);
		assert_eq!(input.min_length, 20);
	}

	#[test]
	fn test_zero_max_length_is_rejected() {
		assert!(matches!(
			GenerationInput::new(0, 0),
			Err(SynopsisError::InvalidLength { max_length: 0 })
		));

		let mut input = GenerationInput::new(5, 1).unwrap();
		assert!(input.set_max_length(0).is_err());
		assert_eq!(input.max_length(), 5);
	}

	#[test]
	fn test_min_above_max_is_accepted() {
		let input = GenerationInput::new(3, 10).unwrap();
		assert_eq!(input.max_length(), 3);
		assert_eq!(input.min_length, 10);
	}
}
