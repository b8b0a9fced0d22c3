/// base64url(JSON) encoding of a `Payload`.
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::PayloadError;
use crate::types::Payload;

/// Serialize a payload to compact JSON text.
///
/// Non-ASCII characters and `/` are written as-is; only the mandatory JSON
/// string escapes are applied.
///
/// # Errors
///
/// Returns `PayloadError::EncodingError` if serialization fails.
pub fn to_json(payload: &Payload) -> Result<String, PayloadError> {
    Ok(serde_json::to_string(payload)?)
}

/// Encode a payload as unpadded base64url over its UTF-8 JSON bytes.
///
/// The result never contains `+`, `/`, `=`, or a newline.
///
/// # Errors
///
/// Returns `PayloadError::EncodingError` if serialization fails.
pub fn encode_payload(payload: &Payload) -> Result<String, PayloadError> {
    let json = to_json(payload)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Inverse of [`encode_payload`]. Trailing whitespace (the newline the
/// writer appends) is ignored.
///
/// # Errors
///
/// Returns `PayloadError::EncodingError` on invalid base64url or JSON.
#[cfg(test)]
pub fn decode_payload(encoded: &str) -> Result<Payload, PayloadError> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded.trim_end())?;
    Ok(serde_json::from_slice(&bytes)?)
}
