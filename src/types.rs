/// Shared data types: parsed CLI options and the serializable payload.
///
/// Both mappings keep keys in first-insertion order; re-inserting an
/// existing key replaces its value without moving it.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An insertion-ordered string-to-string mapping, stored as JSON strings.
pub type ValueMap = Map<String, Value>;

/// Everything the argument scanner extracted from argv.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOptions {
    /// `--vars` entries, last write wins per key.
    pub vars: ValueMap,
    /// `--fields` entries, independent of `vars`.
    pub fields: ValueMap,
    /// Destination file; `None` means stdout.
    pub out_file: Option<String>,
}

impl ParsedOptions {
    /// Split off the payload, leaving the output settings behind.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        Payload {
            vars: self.vars,
            fields: self.fields,
        }
    }
}

/// The prefill payload. Serializes as `{"vars":{..},"fields":{..}}`,
/// with empty mappings written as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub vars: ValueMap,
    pub fields: ValueMap,
}
