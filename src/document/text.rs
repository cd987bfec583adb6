use super::ExtractionError;

/// Decode plain-text/markdown bytes as strict UTF-8. Invalid byte
/// sequences are an extraction error, not silently replaced.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
