/// Payload domain layer: KV parsing, file substitution, base64url encoding.
pub mod encode;
pub mod errors;
pub mod kv;

pub use encode::encode_payload;
pub use errors::PayloadError;
pub use kv::{KeyValue, parse_kv};
