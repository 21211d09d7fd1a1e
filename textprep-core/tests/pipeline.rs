use textprep_core::analysis::normalizer::Normalizer;
use textprep_core::analysis::statistics::statistics;
use textprep_core::analysis::summary::summarize;
use textprep_core::analysis::tokenizer;
use textprep_core::frequency;

const RAW: &str = "\
	This is a test. This is only a test! \n\
	If this were a real emergency \u{2014} you would be informed.\n";

#[test]
fn full_document_pipeline() {
	let normalizer = Normalizer::new().unwrap();

	let cleaned = normalizer.clean(RAW);
	let normalized = normalizer.normalize(RAW, true);

	// cleaning drops all punctuation, normalization keeps terminators
	assert!(!cleaned.contains('.'));
	assert!(normalized.contains('.'));
	assert!(normalized.contains('!'));

	let sentences = tokenizer::sentences(&normalized);
	assert_eq!(sentences.len(), 3);
	assert_eq!(sentences[0], "this is a test");

	let words = tokenizer::words(&normalized);
	let per_sentence: usize = tokenizer::sentence_lengths(&sentences).iter().sum();
	assert_eq!(per_sentence, words.len());

	let stats = statistics(&normalized);
	assert_eq!(stats.total_words, words.len());
	assert_eq!(stats.total_sentences, 3);
	assert_eq!(stats.most_common_words[0].0, "this");

	let summary = summarize(&normalized, 2);
	assert_eq!(summary, "this is a test. this is only a test.");

	let bigrams = frequency::ngrams(&words, 2);
	let total: usize = bigrams.values().sum();
	assert_eq!(total, words.len() - 1);
	assert_eq!(
		bigrams[&vec!["this".to_owned(), "is".to_owned()]],
		2
	);

	let probs = frequency::probabilities(&bigrams, 0.0).unwrap();
	let mass: f64 = probs.values().sum();
	assert!((mass - 1.0).abs() < 1e-9);
}
