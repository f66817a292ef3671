//! Document I/O for imposition

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Count the pages of a PDF on disk
pub async fn read_page_count(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let pages = tokio::task::spawn_blocking(move || {
        Document::load_mem(&bytes).map(|doc| doc.get_pages().len())
    })
    .await??;
    log::debug!("{} has {pages} pages", path.display());
    Ok(pages)
}
