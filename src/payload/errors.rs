/// Errors from the payload domain layer.
use std::io;

use thiserror::Error;

/// Errors that can occur while building, encoding, or writing a payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// A `--vars`/`--fields` argument has no `=` or an empty key.
    #[error("Invalid key=value: '{input}'")]
    InvalidKeyValue {
        /// The offending argument, verbatim.
        input: String,
    },

    /// An `@file` value reference could not be read as UTF-8 text.
    #[error("Failed to read file '{path}': {source}")]
    FileReadError {
        /// Path after the `@` prefix.
        path: String,
        #[source]
        source: io::Error,
    },

    /// The output destination could not be written.
    #[error("Failed to write output to '{path}': {source}")]
    FileWriteError {
        /// Output file path, or `<stdout>`.
        path: String,
        #[source]
        source: io::Error,
    },

    /// JSON serialization or base64url decoding failed.
    #[error("Failed to encode payload: {0}")]
    EncodingError(String),
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::EncodingError(err.to_string())
    }
}

impl From<base64::DecodeError> for PayloadError {
    fn from(err: base64::DecodeError) -> Self {
        Self::EncodingError(err.to_string())
    }
}

/// Exit code mapping for `PayloadError` variants.
impl PayloadError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EncodingError(_) => 1,
            Self::InvalidKeyValue { .. } => 2,
            Self::FileReadError { .. } => 3,
            Self::FileWriteError { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_nonzero_and_distinct() {
        let errs = [
            PayloadError::EncodingError("x".to_owned()),
            PayloadError::InvalidKeyValue {
                input: "x".to_owned(),
            },
            PayloadError::FileReadError {
                path: "x".to_owned(),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
            PayloadError::FileWriteError {
                path: "x".to_owned(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
        ];
        let mut codes: Vec<i32> = errs.iter().map(PayloadError::exit_code).collect();
        assert!(codes.iter().all(|c| *c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_messages_name_the_operation() {
        let err = PayloadError::InvalidKeyValue {
            input: "noequalssign".to_owned(),
        };
        assert_eq!(err.to_string(), "Invalid key=value: 'noequalssign'");

        let err = PayloadError::FileReadError {
            path: "missing.txt".to_owned(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("Failed to read file 'missing.txt'"));
    }
}
