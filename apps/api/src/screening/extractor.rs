//! Text extraction: pluggable, trait-based conversion of an uploaded document to plain text.
//!
//! Default: `PdfTextExtractor` (pdf-extract, in-memory, on the blocking pool).
//! `AppState` holds an `Arc<dyn TextExtractor>`, chosen at startup.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Implement this to accept another document format without touching the handlers.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document's plain text. An empty string is a valid result.
    async fn extract(&self, document: Bytes) -> Result<String, AppError>;
}

pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, document: Bytes) -> Result<String, AppError> {
        if !is_pdf(&document) {
            return Err(AppError::Validation(
                "Uploaded file is not a PDF document".to_string(),
            ));
        }

        let size = document.len();
        let joined = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&document).map_err(|e| e.to_string())
        })
        .await;

        // pdf-extract can panic on malformed input; treat that like any unreadable PDF.
        let extracted = match joined {
            Ok(result) => result,
            Err(e) if e.is_panic() => Err("PDF parser aborted on malformed input".to_string()),
            Err(e) => {
                return Err(AppError::Internal(anyhow::anyhow!(
                    "PDF extraction task failed: {e}"
                )))
            }
        };

        let text = extracted.map_err(|msg| {
            warn!("PDF extraction failed ({size} bytes): {msg}");
            AppError::Extraction(msg)
        })?;

        debug!(bytes = size, chars = text.len(), "Extracted PDF text");
        Ok(text)
    }
}

/// True if the payload starts with the PDF magic bytes.
pub fn is_pdf(head: &[u8]) -> bool {
    head.starts_with(PDF_MAGIC)
}
