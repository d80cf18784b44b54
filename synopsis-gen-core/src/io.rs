use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::error::{SynopsisError, SynopsisResult};

/// Reads a whole corpus file as text.
///
/// # Errors
/// - `SynopsisError::Io` if the file cannot be read
/// - `SynopsisError::InvalidInput` if the file is not UTF-8
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> SynopsisResult<String> {
	let bytes = fs::read(&filename)?;
	String::from_utf8(bytes).map_err(|e| {
		SynopsisError::InvalidInput(format!("{}: {e}", filename.as_ref().display()))
	})
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/fantasy.txt"` → `"fantasy"`
/// - `"fantasy.txt"` → `"fantasy"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> SynopsisResult<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| SynopsisError::InvalidInput("Path has no filename".to_owned()))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> SynopsisResult<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

/// Resolves corpus names to files of `dir` with the given extension.
///
/// # Errors
/// Returns `SynopsisError::UnknownCorpus` for the first name without a file.
pub fn resolve_corpora<P: AsRef<Path>>(dir: P, names: &[&str], extension: &str) -> SynopsisResult<Vec<PathBuf>> {
	names
		.iter()
		.map(|name| {
			let path = dir.as_ref().join(format!("{name}.{extension}"));
			if path.is_file() {
				Ok(path)
			} else {
				Err(SynopsisError::UnknownCorpus((*name).to_owned()))
			}
		})
		.collect()
}
