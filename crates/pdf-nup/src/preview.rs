use crate::nup::compose_document;
use crate::options::NupOptions;
use crate::types::*;
use lopdf::Document;

/// Generate a preview of the n-up output
/// Returns a document holding only the first `max_sheets` sheets
pub async fn generate_preview(
    document: &Document,
    options: &NupOptions,
    max_sheets: usize,
) -> Result<Document> {
    if max_sheets == 0 {
        return Err(NupError::InvalidConfiguration(
            "Preview needs at least one sheet".to_string(),
        ));
    }
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || compose_document(&document, &options, Some(max_sheets)))
        .await?
}
