use rand::SeedableRng;
use rand::rngs::StdRng;

use synopsis_gen_core::model::bigram_model::{BigramModel, is_sentence_terminal, tokenize};
use synopsis_gen_core::model::post_process::normalize;
use synopsis_gen_core::model::sampler::walk;
use synopsis_gen_core::{GenerationInput, NO_TRAINING_DATA, SAMPLE_CORPUS, SynopsisGenerator};

fn input(max_length: usize, min_length: usize) -> GenerationInput {
	GenerationInput::new(max_length, min_length).unwrap()
}

#[test]
fn empty_corpus_returns_fallback() {
	let mut generator = SynopsisGenerator::new();
	generator.train("");
	assert_eq!(generator.generate(&input(10, 1)), NO_TRAINING_DATA);

	// A single token builds no transition at all.
	generator.train("Alone");
	assert_eq!(generator.generate(&input(10, 1)), NO_TRAINING_DATA);
}

#[test]
fn cat_and_dog_scenario() {
	let generator = SynopsisGenerator::from_text("The cat sat. The dog ran.");
	let model = generator.model();

	let after_the: Vec<&str> = model
		.state("The")
		.map(|state| state.successors().expanded().collect())
		.unwrap_or_default();
	assert_eq!(after_the, vec!["cat", "dog"]);
	assert_eq!(model.starters().count("The"), 2);

	let mut rng = StdRng::seed_from_u64(123);
	for _ in 0..25 {
		let synopsis = generator.generate_with_rng(&input(10, 1), &mut rng);
		assert!(synopsis.starts_with("The"), "{synopsis}");
		assert!(synopsis.ends_with('.'), "{synopsis}");
		assert!(tokenize(&synopsis).len() <= 10, "{synopsis}");
	}
}

#[test]
fn dead_end_on_first_step() {
	let generator = SynopsisGenerator::from_text("end. Stop");
	assert_eq!(generator.generate(&input(10, 3)), "Stop.");
}

#[test]
fn seeded_generation_is_deterministic() {
	let generator = SynopsisGenerator::from_text(SAMPLE_CORPUS);

	for seed in [0, 1, 42, 0xDEAD_BEEF] {
		let first = generator.generate_with_rng(&input(60, 10), &mut StdRng::seed_from_u64(seed));
		let second = generator.generate_with_rng(&input(60, 10), &mut StdRng::seed_from_u64(seed));
		assert_eq!(first, second);
	}
}

#[test]
fn walks_are_bounded_and_respect_min_length() {
	let model = BigramModel::build(SAMPLE_CORPUS);
	let mut rng = StdRng::seed_from_u64(2718);

	for max_length in 1..=40 {
		for min_length in [0, 1, 5, 20, 60] {
			let constraints = input(max_length, min_length);
			let tokens = walk(&model, &constraints, &mut rng);
			assert!(!tokens.is_empty());
			assert!(tokens.len() <= max_length);

			let last = &tokens[tokens.len() - 1];
			let dead_end = model.state(last).is_none();
			if tokens.len() < max_length && !dead_end {
				// The walk may only have stopped on a sentence end past `min_length`.
				assert!(is_sentence_terminal(last), "{tokens:?}");
				assert!(tokens.len() >= min_length, "{tokens:?}");
			}

			// No earlier sentence end should have stopped the walk.
			for (position, token) in tokens.iter().enumerate().take(tokens.len() - 1).skip(1) {
				if is_sentence_terminal(token) {
					assert!(position + 1 < min_length, "{tokens:?}");
				}
			}
		}
	}
}

#[test]
fn normalized_output_is_stable() {
	let generator = SynopsisGenerator::from_text(SAMPLE_CORPUS);
	let mut rng = StdRng::seed_from_u64(99);

	for _ in 0..20 {
		let synopsis = generator.generate_with_rng(&input(50, 10), &mut rng);
		assert_eq!(normalize(&tokenize(&synopsis)), synopsis);
	}
}

#[test]
fn retraining_drops_previous_corpus() {
	let mut generator = SynopsisGenerator::from_text(SAMPLE_CORPUS);
	generator.train("Small world. Small talk.");

	let stats = generator.stats();
	assert_eq!(stats.unique_words, 2);
	assert_eq!(stats.total_transitions, 3);
	assert_eq!(stats.sentence_starters, 1);
	assert!(generator.model().state("kingdom.").is_none());
}
