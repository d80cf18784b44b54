use std::path::Path;

use rand::Rng;

use crate::error::SynopsisResult;
use crate::io;
use crate::model::bigram_model::BigramModel;
use crate::model::generation_input::GenerationInput;
use crate::model::post_process::normalize;
use crate::model::report::{ModelStats, preview};
use crate::model::sampler::walk;

/// Sentence returned when generation is asked of an untrained model.
pub const NO_TRAINING_DATA: &str = "No training data available.";

/// High-level synopsis generator owning one bigram model.
///
/// # Responsibilities
/// - Train (or retrain) the model from text, bytes or corpus files
/// - Generate post-processed synopses with an injectable random source
/// - Report statistics and a preview of the transition table
///
/// # Notes
/// - Training always replaces the whole model, nothing from a previous
///   corpus is kept.
/// - Generation only reads the model.
#[derive(Clone, Debug, Default)]
pub struct SynopsisGenerator {
	model: BigramModel,
}

impl SynopsisGenerator {
	/// Creates an untrained generator.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a generator trained on `text`.
	pub fn from_text(text: &str) -> Self {
		let mut generator = Self::new();
		generator.train(text);
		generator
	}

	/// Returns the underlying model.
	pub fn model(&self) -> &BigramModel {
		&self.model
	}

	/// Replaces the model with one built from `text`.
	pub fn train(&mut self, text: &str) {
		self.replace_model(BigramModel::build(text));
	}

	/// Replaces the model with one built from raw bytes.
	///
	/// # Errors
	/// Returns `SynopsisError::InvalidInput` if `bytes` is not UTF-8. The
	/// current model is kept in that case.
	pub fn train_bytes(&mut self, bytes: &[u8]) -> SynopsisResult<()> {
		let model = BigramModel::build_from_bytes(bytes)?;
		self.replace_model(model);
		Ok(())
	}

	/// Swaps in a freshly built model.
	fn replace_model(&mut self, model: BigramModel) {
		self.model = model;
		log::info!("model trained: {:?}", self.stats());
	}

	/// Replaces the model with one built from the concatenation of corpus files.
	///
	/// # Errors
	/// Returns an error if any file cannot be read or is not UTF-8. The
	/// current model is kept in that case.
	pub fn train_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> SynopsisResult<()> {
		let mut corpus = String::new();
		for path in paths {
			corpus.push_str(&io::read_corpus(path)?);
			corpus.push('\n');
		}
		self.train(&corpus);
		Ok(())
	}

	/// Generates one synopsis using the thread-local random source.
	pub fn generate(&self, input: &GenerationInput) -> String {
		self.generate_with_rng(input, &mut rand::rng())
	}

	/// Generates one synopsis using `rng`.
	///
	/// # Returns
	/// - [`NO_TRAINING_DATA`] if the transition table is empty
	/// - Otherwise the walked tokens, joined and normalized
	pub fn generate_with_rng<R: Rng + ?Sized>(&self, input: &GenerationInput, rng: &mut R) -> String {
		if self.model.is_empty() {
			return NO_TRAINING_DATA.to_owned();
		}
		normalize(&walk(&self.model, input, rng))
	}

	/// Generates `count` independent synopses.
	///
	/// # Notes
	/// - Duplicates are possible, nothing is filtered.
	pub fn generate_many(&self, count: usize, input: &GenerationInput) -> Vec<String> {
		self.generate_many_with_rng(count, input, &mut rand::rng())
	}

	/// Generates `count` independent synopses using `rng`.
	pub fn generate_many_with_rng<R: Rng + ?Sized>(
		&self,
		count: usize,
		input: &GenerationInput,
		rng: &mut R,
	) -> Vec<String> {
		(0..count).map(|_| self.generate_with_rng(input, rng)).collect()
	}

	/// Returns aggregate counts over the model.
	pub fn stats(&self) -> ModelStats {
		ModelStats::of(&self.model)
	}

	/// Returns a textual preview of the first `sample_size` keys.
	pub fn preview(&self, sample_size: usize) -> String {
		preview(&self.model, sample_size)
	}
}
