use textprep_core::error::TextError;
use textprep_core::frequency::FrequencyTable;
use textprep_core::io::{load_frequencies, save_frequencies};

fn sample_table() -> FrequencyTable {
	let mut table = FrequencyTable::new();
	table.insert(vec!["the".to_owned()], 3);
	table.insert(vec!["the".to_owned(), "cat".to_owned()], 2);
	table.insert(vec!["caf\u{E9}".to_owned(), "au".to_owned(), "lait".to_owned()], 1);
	table
}

#[test]
fn save_then_load_round_trips() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir");
	let path = dir.path().join("frequencies.json");

	let table = sample_table();
	save_frequencies(&table, &path).unwrap();
	assert_eq!(load_frequencies(&path).unwrap(), table);
}

#[test]
fn load_missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir");
	let path = dir.path().join("does_not_exist.json");

	assert!(matches!(load_frequencies(&path), Err(TextError::Io(_))));
}

#[test]
fn load_rejects_malformed_contents() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir");
	let path = dir.path().join("broken.json");
	std::fs::write(&path, "{ definitely not a table").unwrap();

	assert!(matches!(load_frequencies(&path), Err(TextError::Json(_))));
}

#[test]
fn reserved_delimiter_fails_before_writing() {
	let dir = tempfile::tempdir().expect("Failed to create temp dir");
	let path = dir.path().join("never_written.json");

	let mut table = FrequencyTable::new();
	table.insert(vec!["x||y".to_owned()], 1);

	assert!(matches!(
		save_frequencies(&table, &path),
		Err(TextError::ReservedDelimiter(_))
	));
	assert!(!path.exists());
}
