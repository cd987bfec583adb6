use super::ExtractionError;

pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(join_pages(&raw))
}

/// pdf-extract returns the whole document as one string with form feed
/// characters (`\x0C`) separating pages. Keep each page that carried any
/// text, followed by a single newline; image-only or blank pages
/// contribute nothing, not even a blank line. A document whose every page
/// is blank yields an empty string, which the orchestrator treats as an
/// empty document rather than an error.
fn join_pages(raw: &str) -> String {
    let mut out = String::new();
    for page in raw.split('\x0C') {
        if !page.trim().is_empty() {
            out.push_str(page);
            out.push('\n');
        }
    }
    out
}
