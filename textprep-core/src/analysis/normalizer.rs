use regex::Regex;

use crate::error::TextResult;

/// Returns true when a character counts as part of a word for the
/// contraction-apostrophe rule: letters, digits, underscore.
fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Collapses every whitespace run (spaces, tabs, newlines) to a single
/// ASCII space and trims the ends.
fn collapse_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Standardizes typographic characters to their ASCII equivalents.
///
/// Rewrite rules, applied per character:
/// - curly double quotes (U+201C, U+201D) -> `"`
/// - curly single quotes / apostrophes (U+2018, U+2019) -> `'`
/// - em dash (U+2014) and en dash (U+2013) -> `-`
fn standardize_char(c: char) -> char {
	match c {
		'\u{201C}' | '\u{201D}' => '"',
		'\u{2018}' | '\u{2019}' => '\'',
		'\u{2014}' | '\u{2013}' => '-',
		other => other,
	}
}

/// Replaces punctuation with spaces, keeping apostrophes only inside
/// contractions (a word character on both sides). All other characters
/// that are neither word characters nor whitespace become a space.
fn strip_stray_apostrophes(text: &str) -> String {
	let chars: Vec<char> = text.chars().collect();
	chars
		.iter()
		.enumerate()
		.map(|(i, &c)| {
			if is_word_char(c) || c.is_whitespace() {
				c
			} else if c == '\'' {
				let word_before = i
					.checked_sub(1)
					.map(|j| chars[j])
					.is_some_and(is_word_char);
				let word_after = chars.get(i + 1).copied().is_some_and(is_word_char);
				if word_before && word_after { c } else { ' ' }
			} else {
				' '
			}
		})
		.collect()
}

/// Cleaning and normalization passes over raw document text.
///
/// The character-class patterns are fixed and compiled once at
/// construction; a compile failure surfaces as [`TextError::Pattern`],
/// which is the only way any method of this type can fail.
///
/// # Invariants
/// - Output of `clean` and `normalize` contains no consecutive spaces
///   and no leading or trailing whitespace.
/// - `normalize` is a fixed point of itself: applying it twice yields
///   the same result as applying it once.
///
/// [`TextError::Pattern`]: crate::error::TextError::Pattern
#[derive(Debug)]
pub struct Normalizer {
	/// `[^\w\s]`: anything that is neither a word character nor whitespace.
	strip_symbols: Regex,
	/// `[^\w\s.!?'-]`: anything outside word characters, whitespace,
	/// sentence terminators, apostrophe, and hyphen.
	strip_keep_sentences: Regex,
}

impl Normalizer {
	/// Compiles the fixed cleaning patterns.
	///
	/// # Errors
	/// Returns [`TextError::Pattern`] if a pattern fails to compile.
	/// This should not happen with the hard-coded patterns, but the
	/// contract is kept explicit rather than panicking.
	///
	/// [`TextError::Pattern`]: crate::error::TextError::Pattern
	pub fn new() -> TextResult<Self> {
		Ok(Self {
			strip_symbols: Regex::new(r"[^\w\s]")?,
			strip_keep_sentences: Regex::new(r"[^\w\s.!?'-]")?,
		})
	}

	/// Cleans text by removing punctuation and extra whitespace.
	///
	/// Removes every character that is neither a word character nor
	/// whitespace, then collapses whitespace runs to single spaces and
	/// trims the ends. Case is left untouched.
	pub fn clean(&self, text: &str) -> String {
		let stripped = self.strip_symbols.replace_all(text, "");
		collapse_whitespace(&stripped)
	}

	/// Normalizes text while optionally preserving sentence boundaries.
	///
	/// # Parameters
	/// - `text`: Input text.
	/// - `preserve_sentences`: If true, keeps `.` `!` `?` so sentences
	///   can still be detected downstream.
	///
	/// # Behavior
	/// Applies, in order:
	/// 1. Lowercasing.
	/// 2. Quote and dash standardization (see [`standardize_char`]).
	/// 3. Punctuation stripping: with `preserve_sentences`, every
	///    character outside `[\w\s.!?'-]` becomes a space; without it,
	///    all punctuation becomes a space except apostrophes inside
	///    contractions.
	/// 4. Whitespace collapsing and trimming.
	///
	/// Total over any input; never fails.
	pub fn normalize(&self, text: &str, preserve_sentences: bool) -> String {
		let lowered = text.to_lowercase();
		let standardized: String = lowered.chars().map(standardize_char).collect();

		let stripped = if preserve_sentences {
			self.strip_keep_sentences
				.replace_all(&standardized, " ")
				.into_owned()
		} else {
			strip_stray_apostrophes(&standardized)
		};

		collapse_whitespace(&stripped)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn normalizer() -> Normalizer {
		Normalizer::new().expect("fixed patterns must compile")
	}

	#[test]
	fn clean_removes_punctuation_and_collapses_whitespace() {
		let n = normalizer();
		assert_eq!(
			n.clean("Hello, World!!  Testing... 123."),
			"Hello World Testing 123"
		);
	}

	#[test]
	fn clean_handles_tabs_and_newlines() {
		let n = normalizer();
		assert_eq!(n.clean("  a\t\nb  "), "a b");
	}

	#[test]
	fn clean_of_empty_is_empty() {
		let n = normalizer();
		assert_eq!(n.clean(""), "");
		assert_eq!(n.clean("   \n\t "), "");
	}

	#[test]
	fn normalize_preserves_sentence_terminators() {
		let n = normalizer();
		assert_eq!(
			n.normalize("This is a test. This is only a test!", true),
			"this is a test. this is only a test!"
		);
	}

	#[test]
	fn normalize_standardizes_quotes_and_dashes() {
		let n = normalizer();
		assert_eq!(
			n.normalize("\u{201C}Hi\u{201D} \u{2014} it\u{2019}s fine", true),
			"hi - it's fine"
		);
	}

	#[test]
	fn normalize_without_sentences_keeps_contractions() {
		let n = normalizer();
		assert_eq!(n.normalize("Don't stop... now!", false), "don't stop now");
	}

	#[test]
	fn normalize_without_sentences_drops_stray_apostrophes() {
		let n = normalizer();
		assert_eq!(n.normalize("'tis a 'quote'", false), "tis a quote");
	}

	#[test]
	fn normalize_is_idempotent() {
		let n = normalizer();
		let samples = [
			"Mixed CASE, with -- punctuation?! And\nnewlines.",
			"caf\u{E9} \u{2018}quoted\u{2019} \u{2013} done",
			"",
		];
		for sample in samples {
			for preserve in [true, false] {
				let once = n.normalize(sample, preserve);
				assert_eq!(n.normalize(&once, preserve), once);
			}
		}
	}
}
