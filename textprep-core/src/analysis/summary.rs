use super::tokenizer;

/// Builds a purely extractive summary from the leading sentences.
///
/// # Parameters
/// - `text`: Input text (typically already normalized).
/// - `num_sentences`: How many leading sentences to keep. Fewer are
///   used when the text is shorter; no sentences yields an empty
///   string.
///
/// # Behavior
/// The selected sentences are joined with `". "` and a trailing `.` is
/// appended unless the result already ends in a sentence terminator.
/// No salience scoring of any kind.
pub fn summarize(text: &str, num_sentences: usize) -> String {
	let sentences = tokenizer::sentences(text);
	if sentences.is_empty() {
		return String::new();
	}

	let mut summary = sentences
		.into_iter()
		.take(num_sentences)
		.collect::<Vec<_>>()
		.join(". ");

	if !summary.ends_with(['.', '!', '?']) {
		summary.push('.');
	}
	summary
}
