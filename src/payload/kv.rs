/// `key=value` argument parsing with `@file` substitution and `\n` unescaping.
use std::fs;

use super::PayloadError;

/// Prefix marking a value as a file reference.
const FILE_PREFIX: char = '@';

/// Literal two-character escape typed on a command line.
const ESCAPED_NEWLINE: &str = "\\n";

/// A parsed `key=value` pair with its value fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
    /// Path the value was loaded from, when it came from `@file`.
    pub source_file: Option<String>,
}

/// Parse a KV string.
///
/// Only the first `=` splits key from value. A value starting with `@` is
/// replaced by the contents of the named file, and every literal `\n` in
/// the final value (file contents included) becomes a newline.
///
/// # Errors
///
/// Returns `PayloadError::InvalidKeyValue` if `s` has no `=` or the key is
/// empty, and `PayloadError::FileReadError` if an `@file` cannot be read.
pub fn parse_kv(s: &str) -> Result<KeyValue, PayloadError> {
    let (key, raw) = match s.split_once('=') {
        Some((key, raw)) if !key.is_empty() => (key, raw),
        _ => {
            return Err(PayloadError::InvalidKeyValue {
                input: s.to_owned(),
            });
        }
    };

    let (value, source_file) = match raw.strip_prefix(FILE_PREFIX) {
        Some(path) => (read_value_file(path)?, Some(path.to_owned())),
        None => (raw.to_owned(), None),
    };

    Ok(KeyValue {
        key: key.to_owned(),
        value: unescape_newlines(&value),
        source_file,
    })
}

/// Replace every literal `\n` two-character sequence with a real newline.
#[must_use]
pub fn unescape_newlines(value: &str) -> String {
    value.replace(ESCAPED_NEWLINE, "\n")
}

fn read_value_file(path: &str) -> Result<String, PayloadError> {
    fs::read_to_string(path).map_err(|source| PayloadError::FileReadError {
        path: path.to_owned(),
        source,
    })
}
