use thiserror::Error;

/// Errors produced by the text-processing core.
///
/// Every core function is total over well-formed input except the cases
/// listed here; nothing fails silently or returns a partial result.
#[derive(Error, Debug)]
pub enum TextError {
	/// A hard-coded text-matching pattern failed to compile.
	///
	/// Unreachable with the fixed patterns shipped in this crate, but the
	/// construction path keeps the contract explicit.
	#[error("Pattern error: {0}")]
	Pattern(#[from] regex::Error),

	/// Probabilities were requested over a distribution whose total mass
	/// is zero (empty table, or zero counts with zero smoothing).
	#[error("Cannot compute probabilities over an empty distribution")]
	EmptyDistribution,

	/// A token contains the reserved key delimiter `||`, which would make
	/// the serialized table ambiguous on reload.
	#[error("Token {0:?} contains the reserved delimiter \"||\"")]
	ReservedDelimiter(String),

	/// Frequency-table persistence failed at the file level.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// A serialized frequency table could not be encoded or decoded.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

pub type TextResult<T> = Result<T, TextError>;
