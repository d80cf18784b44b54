//! Top-level module for the synopsis generation system.
//!
//! - Word-level bigram model (`BigramModel`)
//! - Weighted successor histograms (`State`, `Occurrences`)
//! - Length constraints (`GenerationInput`)
//! - Random walk (`sampler`) and text clean-up (`post_process`)
//! - A high-level interface (`SynopsisGenerator`)

/// High-level interface: training, generation and reporting on one model.
pub mod generator;

/// Word-level bigram model and tokenization.
///
/// Builds the transition table and the sentence-starter pool.
pub mod bigram_model;

/// Successor histograms with weighted random sampling.
pub mod state;

/// Length constraints for a generation.
pub mod generation_input;

/// Start selection and bounded random walk.
pub mod sampler;

/// Joins walked tokens into a readable sentence.
pub mod post_process;

/// Statistics and transition-table preview.
pub mod report;
