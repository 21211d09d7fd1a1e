use textprep_core::analysis::normalizer::Normalizer;
use textprep_core::analysis::statistics::statistics;
use textprep_core::analysis::summary::summarize;
use textprep_core::analysis::tokenizer;
use textprep_core::frequency;
use textprep_core::io::{load_frequencies, save_frequencies};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample = "
    This is a test. This is only a test!
    If this were a real emergency, you would be informed.
    ";

    // The normalizer compiles its fixed patterns once; reuse it for
    // every document in the pipeline
    let normalizer = Normalizer::new()?;

    // Lowercase, standardize quotes/dashes, strip punctuation while
    // keeping sentence terminators
    let cleaned = normalizer.normalize(sample, true);
    println!("Cleaned text: {cleaned}\n");

    // Split into sentences (terminators removed, order preserved)
    let sentences = tokenizer::sentences(&cleaned);
    println!("Sentences: {sentences:?}\n");

    // Split into word tokens
    let words = tokenizer::words(&cleaned);
    println!("Words: {words:?}\n");

    // Count word bigrams over the token sequence
    let bigrams = frequency::ngrams(&words, 2);
    println!("Word bigrams: {bigrams:?}\n");

    // Character trigrams work the same way, over character tokens
    let chars = tokenizer::characters(&cleaned, true);
    let char_trigrams = frequency::ngrams(&chars, 3);
    println!("Distinct character trigrams: {}\n", char_trigrams.len());

    // Descriptive statistics on the normalized text
    let stats = statistics(&cleaned);
    println!("Text statistics: {stats:#?}\n");

    // Extractive summary: the first two sentences, verbatim
    let summary = summarize(sample, 2);
    println!("Summary: {summary}\n");

    // Convert counts to probabilities (no smoothing); the values sum
    // to 1.0 over the observed bigrams
    let probabilities = frequency::probabilities(&bigrams, 0.0)?;
    let mass: f64 = probabilities.values().sum();
    println!("Probability mass over bigrams: {mass}\n");

    // Persist the bigram table and read it back; tuple keys are joined
    // with "||" in the file and reconstructed on load
    let path = std::env::temp_dir().join("textprep_demo_bigrams.json");
    save_frequencies(&bigrams, &path)?;
    let reloaded = load_frequencies(&path)?;
    println!(
        "Saved and reloaded {} bigrams via {}",
        reloaded.len(),
        path.display()
    );

    Ok(())
}
