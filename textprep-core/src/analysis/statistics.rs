use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tokenizer;

/// Number of top-ranked words reported by [`statistics`].
pub const TOP_WORDS: usize = 10;

/// Descriptive statistics over one document.
///
/// `most_common_words` is an ordered sequence rather than a map so the
/// ranking survives serialization: descending count, ties broken by
/// first occurrence in the input.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextStatistics {
	/// Character count of the input (characters, not bytes).
	pub total_characters: usize,
	pub total_words: usize,
	pub total_sentences: usize,
	/// Mean character length of word tokens, rounded to 2 decimals.
	/// Zero when there are no words.
	pub avg_word_length: f64,
	/// Mean word count per sentence, rounded to 2 decimals.
	/// Zero when there are no sentences.
	pub avg_sentence_length: f64,
	/// Top [`TOP_WORDS`] word tokens with their counts.
	pub most_common_words: Vec<(String, usize)>,
}

fn round2(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}

/// Ranks word tokens by descending count.
///
/// Candidates are collected in first-occurrence order and sorted with a
/// stable sort, so equal counts keep their original relative order.
fn most_common(words: &[String], limit: usize) -> Vec<(String, usize)> {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	let mut order: Vec<&str> = Vec::new();

	for word in words {
		let entry = counts.entry(word.as_str()).or_insert(0);
		if *entry == 0 {
			order.push(word.as_str());
		}
		*entry += 1;
	}

	let mut ranked: Vec<(String, usize)> = order
		.into_iter()
		.map(|word| (word.to_owned(), counts[word]))
		.collect();
	ranked.sort_by(|a, b| b.1.cmp(&a.1));
	ranked.truncate(limit);
	ranked
}

/// Computes descriptive statistics for a document.
///
/// # Behavior
/// - Character total counts Unicode characters, not bytes.
/// - Averages are guarded against empty inputs: no words or no
///   sentences yields an average of zero rather than a division error.
/// - The word ranking reports exact counts for the top
///   [`TOP_WORDS`] tokens.
pub fn statistics(text: &str) -> TextStatistics {
	let words = tokenizer::words(text);
	let sentences = tokenizer::sentences(text);

	let total_words = words.len();
	let total_sentences = sentences.len();

	let avg_word_length = if total_words > 0 {
		let total_length: usize = words.iter().map(|w| w.chars().count()).sum();
		round2(total_length as f64 / total_words as f64)
	} else {
		0.0
	};

	let avg_sentence_length = if total_sentences > 0 {
		let total_length: usize = tokenizer::sentence_lengths(&sentences).iter().sum();
		round2(total_length as f64 / total_sentences as f64)
	} else {
		0.0
	};

	TextStatistics {
		total_characters: text.chars().count(),
		total_words,
		total_sentences,
		avg_word_length,
		avg_sentence_length,
		most_common_words: most_common(&words, TOP_WORDS),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn statistics_on_short_document() {
		let stats = statistics("the cat sat on the mat. the cat ran.");

		assert_eq!(stats.total_characters, 36);
		assert_eq!(stats.total_words, 9);
		assert_eq!(stats.total_sentences, 2);
		assert_eq!(stats.avg_word_length, 2.89);
		assert_eq!(stats.avg_sentence_length, 4.5);
		assert_eq!(stats.most_common_words[0], ("the".to_owned(), 3));
	}

	#[test]
	fn ties_keep_first_occurrence_order() {
		let stats = statistics("the cat sat on the mat. the cat ran.");
		let ranked: Vec<&str> = stats
			.most_common_words
			.iter()
			.map(|(w, _)| w.as_str())
			.collect();
		// "the" (3), "cat" (2), then the single-occurrence words in
		// the order they first appeared
		assert_eq!(ranked, vec!["the", "cat", "sat", "on", "mat", "ran"]);
	}

	#[test]
	fn ranking_is_capped_at_top_words() {
		let text = "a b c d e f g h i j k l m";
		let stats = statistics(text);
		assert_eq!(stats.most_common_words.len(), TOP_WORDS);
		assert_eq!(stats.most_common_words[0], ("a".to_owned(), 1));
	}

	#[test]
	fn empty_input_yields_zeroes() {
		let stats = statistics("");
		assert_eq!(stats.total_characters, 0);
		assert_eq!(stats.total_words, 0);
		assert_eq!(stats.total_sentences, 0);
		assert_eq!(stats.avg_word_length, 0.0);
		assert_eq!(stats.avg_sentence_length, 0.0);
		assert!(stats.most_common_words.is_empty());
	}

	#[test]
	fn character_total_counts_characters_not_bytes() {
		let stats = statistics("caf\u{E9}");
		assert_eq!(stats.total_characters, 4);
	}
}
