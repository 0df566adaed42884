use bytes::Bytes;

use crate::errors::AppError;

/// Extracts the text layer of a PDF, all pages in page order, one newline
/// after each page so words never run together across a page break.
///
/// Parsing runs on the blocking pool. A parser panic on a malformed document
/// is reported as an extraction error for that file.
pub async fn extract_text(file_name: &str, bytes: Bytes) -> Result<String, AppError> {
    let name = file_name.to_string();
    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map(|pages| pages.iter().map(|page| format!("{page}\n")).collect::<String>())
            .map_err(|e| AppError::Extraction(format!("Could not read PDF '{name}': {e}")))
    })
    .await
    .map_err(|_| AppError::Extraction(format!("Could not read PDF '{file_name}': parser aborted")))?
}
