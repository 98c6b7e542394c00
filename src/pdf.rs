use std::path::Path;

use anyhow::{Context, Result};
use lopdf::Document;
use tracing::debug;

/// Extract each page's text, in page order. This is the only hard-failure
/// boundary: if the document cannot be opened or a page's text cannot be
/// rendered, the whole run aborts before any output is written.
pub fn page_texts(path: &Path) -> Result<Vec<String>> {
    let doc = Document::load(path)
        .with_context(|| format!("failed to open PDF '{}'", path.display()))?;

    let mut pages = Vec::new();
    for &number in doc.get_pages().keys() {
        let text = doc
            .extract_text(&[number])
            .with_context(|| format!("failed to extract text from page {number}"))?;
        debug!(page = number, chars = text.len(), "extracted page text");
        pages.push(text);
    }
    Ok(pages)
}
