use std::sync::LazyLock;

use regex::Regex;

use super::bigram_model::is_sentence_terminal;

/// Whitespace in front of a punctuation mark.
static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\s+([.!?,:;])").expect("valid punctuation regex"));

/// A sentence end followed by a capital letter, with any spacing in between.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"([.!?])\s*([A-Z])").expect("valid boundary regex"));

/// Turns a token sequence into a readable sentence.
///
/// # Behavior
/// - Joins tokens with single spaces.
/// - Appends `.` unless the text already ends with `.`, `!` or `?`.
/// - Drops whitespace in front of `. ! ? , : ;`.
/// - Puts exactly one space between a sentence end and a following capital.
/// - Capitalizes the first character.
///
/// Normalizing already normalized text leaves it unchanged.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> String {
	let mut text = tokens
		.iter()
		.map(|token| token.as_ref())
		.collect::<Vec<&str>>()
		.join(" ");

	if !text.is_empty() && !is_sentence_terminal(&text) {
		text.push('.');
	}

	let text = SPACE_BEFORE_PUNCTUATION.replace_all(&text, "$1");
	let text = SENTENCE_BOUNDARY.replace_all(&text, "$1 $2");

	capitalize_first(&text)
}

/// Uppercases the first character of `text`.
fn capitalize_first(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
