use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::BreakerError;

/// Reads a text file and returns its non-empty lines, trimmed.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Drops lines that are blank once trimmed
///
/// # Errors
/// - `BreakerError::Io` if the file cannot be opened or read
/// - `BreakerError::EmptySource` if no line survives trimming
pub fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, BreakerError> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|e| BreakerError::io(path, e))?;

	let lines: Vec<String> = contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect();

	if lines.is_empty() {
		return Err(BreakerError::EmptySource { path: path.to_path_buf() });
	}
	Ok(lines)
}

/// Loads a dictionary: one non-empty entry per line.
pub fn load_wordlist<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, BreakerError> {
	read_lines(filename)
}

/// Writes `text` to `path`, creating parent directories if needed.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), BreakerError> {
	let path = path.as_ref();
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent).map_err(|e| BreakerError::io(parent, e))?;
		}
	}
	fs::write(path, text).map_err(|e| BreakerError::io(path, e))
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/unigrams.csv` + `"bin"` → `data/unigrams.bin`
pub(crate) fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn output_path_swaps_extension() {
		let out = build_output_path("data/unigrams.csv", "bin").unwrap();
		assert_eq!(out, PathBuf::from("data/unigrams.bin"));
	}

	#[test]
	fn output_path_without_parent() {
		let out = build_output_path("trigrams.csv", "bin").unwrap();
		assert_eq!(out, PathBuf::from("trigrams.bin"));
	}
}
