//! Deterministic text transformations.
//!
//! The pipeline composes left to right: raw text is cleaned or
//! normalized, then tokenized, then measured or summarized. No module
//! here calls into another except through plain function composition,
//! so each stage can be exercised in isolation.

/// Cleaning and normalization passes over raw text.
///
/// Holds the compiled character-class patterns; everything else in the
/// pipeline works on its output conventions (single spaces, trimmed,
/// lowercase when normalized).
pub mod normalizer;

/// Sentence, word, and character tokenization.
///
/// Pure splitting functions with no state.
pub mod tokenizer;

/// Descriptive statistics over a tokenized document.
pub mod statistics;

/// Literal first-N-sentences extractive summary.
pub mod summary;
