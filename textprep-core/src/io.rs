use std::fs;
use std::path::Path;

use crate::error::TextResult;
use crate::frequency::{self, FrequencyTable};

/// Writes a frequency table to a file in the serialized JSON form.
///
/// The whole table is encoded before the file is touched, so a
/// [`TextError::ReservedDelimiter`] failure leaves no partial output.
///
/// [`TextError::ReservedDelimiter`]: crate::error::TextError::ReservedDelimiter
pub fn save_frequencies<P: AsRef<Path>>(table: &FrequencyTable, path: P) -> TextResult<()> {
	let data = frequency::serialize(table)?;
	fs::write(path, data)?;
	Ok(())
}

/// Reads a frequency table back from a file.
///
/// # Errors
/// - [`TextError::Io`] if the file cannot be read.
/// - [`TextError::Json`] if the contents are not a valid table.
///
/// [`TextError::Io`]: crate::error::TextError::Io
/// [`TextError::Json`]: crate::error::TextError::Json
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> TextResult<FrequencyTable> {
	let data = fs::read_to_string(path)?;
	frequency::deserialize(&data)
}
