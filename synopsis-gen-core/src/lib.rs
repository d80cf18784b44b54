//! Bigram (first-order Markov chain) synopsis generator.
//!
//! This crate learns word-to-word transitions from a training corpus and
//! produces new text that statistically resembles it:
//! - Word-level bigram model with a frequency-weighted sentence-starter pool
//! - Bounded random walk with a minimum length before sentence ends may stop it
//! - Punctuation and capitalization clean-up of the generated text
//! - Statistics and a preview of the learned transitions
//!
//! Randomness is always injectable, so a seeded `rand::rngs::StdRng` gives
//! reproducible output.

/// Error types.
pub mod error;

/// Bigram model, sampling and text post-processing.
pub mod model;

/// Corpus file helpers (reading, listing, name resolution).
pub mod io;

/// Bundled sample corpus.
mod sample;

pub use error::{SynopsisError, SynopsisResult};
pub use model::generation_input::GenerationInput;
pub use model::generator::{NO_TRAINING_DATA, SynopsisGenerator};
pub use model::report::ModelStats;
pub use sample::SAMPLE_CORPUS;
