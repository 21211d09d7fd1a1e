use std::collections::{BTreeMap, HashMap};

use crate::error::{TextError, TextResult};

/// An n-gram key: an ordered, fixed-arity sequence of tokens.
///
/// Unigrams are sequences of length 1 rather than bare tokens, keeping
/// the table uniform; the scalar form only exists at the serialization
/// boundary.
pub type NGram = Vec<String>;

/// Mapping from n-gram to occurrence count.
pub type FrequencyTable = HashMap<NGram, usize>;

/// Mapping from n-gram to probability in `[0, 1]`.
pub type ProbabilityTable = HashMap<NGram, f64>;

/// Reserved delimiter joining tuple keys in the serialized form.
/// Must never occur inside a token.
pub const KEY_DELIMITER: &str = "||";

/// Counts n-gram occurrences over a token sequence.
///
/// # Parameters
/// - `tokens`: The source token sequence.
/// - `n`: Window width, `n >= 1`.
///
/// # Behavior
/// Slides a window of width `n` with stride 1, producing exactly
/// `len(tokens) - n + 1` windows (none when `n` exceeds the sequence
/// length). Every distinct n-gram is reported with its exact count;
/// no sampling, no truncation. `n = 0` yields an empty table.
pub fn ngrams(tokens: &[String], n: usize) -> FrequencyTable {
	let mut table = FrequencyTable::new();
	if n == 0 {
		return table;
	}
	for window in tokens.windows(n) {
		*table.entry(window.to_vec()).or_insert(0) += 1;
	}
	table
}

/// Converts counts to probabilities with additive smoothing.
///
/// Each probability is
/// `(count + smoothing) / (total + smoothing * distinct_keys)`.
///
/// # Errors
/// Returns [`TextError::EmptyDistribution`] when the denominator has no
/// mass (empty table, or zero total with zero smoothing) instead of
/// dividing by zero.
pub fn probabilities(counts: &FrequencyTable, smoothing: f64) -> TextResult<ProbabilityTable> {
	let total: usize = counts.values().sum();
	let denominator = total as f64 + smoothing * counts.len() as f64;
	if denominator <= 0.0 {
		return Err(TextError::EmptyDistribution);
	}

	Ok(counts
		.iter()
		.map(|(ngram, &count)| (ngram.clone(), (count as f64 + smoothing) / denominator))
		.collect())
}

/// Serializes a frequency table to pretty-printed JSON.
///
/// Keys of length 1 are written as the bare token; longer keys are
/// joined with [`KEY_DELIMITER`]. Keys are emitted in sorted order so
/// the output is stable, and non-ASCII characters are written
/// literally, not escaped.
///
/// # Errors
/// Returns [`TextError::ReservedDelimiter`] if any token contains the
/// delimiter sequence, since such a table could not round-trip. The
/// check runs before anything is written.
pub fn serialize(table: &FrequencyTable) -> TextResult<String> {
	let mut flat: BTreeMap<String, usize> = BTreeMap::new();

	for (ngram, &count) in table {
		for token in ngram {
			if token.contains(KEY_DELIMITER) {
				return Err(TextError::ReservedDelimiter(token.clone()));
			}
		}
		flat.insert(ngram.join(KEY_DELIMITER), count);
	}

	Ok(serde_json::to_string_pretty(&flat)?)
}

/// Reconstructs a frequency table from its serialized form.
///
/// Keys containing [`KEY_DELIMITER`] are split back into tuples;
/// plain keys become length-1 sequences. Exact inverse of
/// [`serialize`] for any table whose tokens avoid the delimiter.
///
/// # Errors
/// Returns [`TextError::Json`] on malformed input.
pub fn deserialize(data: &str) -> TextResult<FrequencyTable> {
	let flat: BTreeMap<String, usize> = serde_json::from_str(data)?;

	Ok(flat
		.into_iter()
		.map(|(key, count)| {
			let ngram: NGram = if key.contains(KEY_DELIMITER) {
				key.split(KEY_DELIMITER).map(str::to_owned).collect()
			} else {
				vec![key]
			};
			(ngram, count)
		})
		.collect())
}
