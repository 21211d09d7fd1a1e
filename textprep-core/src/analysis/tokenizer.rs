/// Characters that terminate a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

fn is_terminator(c: char) -> bool {
	SENTENCE_TERMINATORS.contains(&c)
}

/// Splits text into sentences.
///
/// Splits on every run of `.` `!` `?`, trims each piece, and discards
/// the empty ones. Order is preserved; the returned sentences contain
/// no terminator characters.
pub fn sentences(text: &str) -> Vec<String> {
	text.split(is_terminator)
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Splits text into word tokens.
///
/// Sentence terminators are stripped first (no replacement), then the
/// remainder is split on whitespace runs. Empty pieces are discarded.
pub fn words(text: &str) -> Vec<String> {
	let without_terminators: String = text.chars().filter(|c| !is_terminator(*c)).collect();
	without_terminators
		.split_whitespace()
		.map(str::to_owned)
		.collect()
}

/// Splits text into single-character tokens.
///
/// # Parameters
/// - `include_space`: If true, whitespace runs are collapsed to one
///   space first and the collapsed spaces appear as tokens; if false,
///   space characters are omitted entirely.
pub fn characters(text: &str, include_space: bool) -> Vec<String> {
	if include_space {
		let mut tokens = Vec::new();
		let mut in_whitespace = false;
		for c in text.chars() {
			if c.is_whitespace() {
				if !in_whitespace {
					tokens.push(" ".to_owned());
				}
				in_whitespace = true;
			} else {
				tokens.push(c.to_string());
				in_whitespace = false;
			}
		}
		tokens
	} else {
		text.chars()
			.filter(|c| *c != ' ')
			.map(|c| c.to_string())
			.collect()
	}
}

/// Word count for each sentence, in order.
pub fn sentence_lengths(sentences: &[String]) -> Vec<usize> {
	sentences.iter().map(|s| words(s).len()).collect()
}
