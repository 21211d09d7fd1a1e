//! Text preprocessing and n-gram frequency analysis library.
//!
//! This crate provides a deterministic text pipeline including:
//! - Cleaning and normalization of raw documents
//! - Sentence, word, and character tokenization
//! - Descriptive statistics (counts, averages, top words)
//! - Extractive first-N-sentences summaries
//! - N-gram frequency and probability tables with a stable
//!   JSON persistence format
//!
//! All operations are pure and reentrant: each call builds fresh
//! structures from its input and shares no mutable state, so pipelines
//! for different documents are trivially independent.

/// Normalization, tokenization, statistics, and summarization.
pub mod analysis;

/// Error taxonomy shared by the whole crate.
pub mod error;

/// N-gram frequency tables, probabilities, and their serialized form.
pub mod frequency;

/// File persistence for frequency tables.
pub mod io;
