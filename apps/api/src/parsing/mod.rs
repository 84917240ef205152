//! Document decoding: turns uploaded bytes into a `RawDocument`.
//!
//! `AppState` holds an `Arc<dyn DocumentDecoder>`; the default `FileDecoder`
//! dispatches on the filename extension and runs the actual decoding on the
//! blocking pool, since PDF and DOCX extraction are CPU-bound.

pub mod docx;
pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::document::RawDocument;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Could not read document: {0}")]
    Decode(String),
}

/// Formats the decoder understands, keyed by lower-cased extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Resolves the format from the text after the last `.` of `filename`.
    pub fn from_filename(filename: &str) -> Result<Self, DecodeError> {
        let ext = filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" | "doc" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::Text),
            _ => Err(DecodeError::UnsupportedFormat(ext)),
        }
    }
}

#[async_trait]
pub trait DocumentDecoder: Send + Sync {
    async fn decode(&self, content: Bytes, filename: &str) -> Result<RawDocument, DecodeError>;
}

/// Decoder backed by pdf-extract, the DOCX zip container and UTF-8 text.
pub struct FileDecoder;

#[async_trait]
impl DocumentDecoder for FileDecoder {
    async fn decode(&self, content: Bytes, filename: &str) -> Result<RawDocument, DecodeError> {
        let format = DocumentFormat::from_filename(filename)?;
        debug!(?format, bytes = content.len(), "Decoding document");

        let joined = tokio::task::spawn_blocking(move || decode_sync(format, &content)).await;

        match joined {
            Ok(result) => result,
            Err(e) => {
                // pdf-extract panics on some malformed inputs
                warn!("Decoder task failed: {e}");
                Err(DecodeError::Decode(format!("{format:?} decoder aborted")))
            }
        }
    }
}

fn decode_sync(format: DocumentFormat, content: &[u8]) -> Result<RawDocument, DecodeError> {
    match format {
        DocumentFormat::Pdf => pdf::decode_pdf(content),
        DocumentFormat::Docx => docx::decode_docx(content),
        DocumentFormat::Text => Ok(decode_text(content)),
    }
}

/// UTF-8 text with invalid byte sequences dropped.
fn decode_text(content: &[u8]) -> RawDocument {
    let text = String::from_utf8_lossy(content).replace(char::REPLACEMENT_CHARACTER, "");
    RawDocument::plain(text)
}
