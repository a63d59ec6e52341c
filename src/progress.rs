//! Upload progress reporting.
//!
//! Multipart encoding stays with `reqwest`; each part's payload is wrapped
//! in a chunked stream that reports cumulative progress as the transport
//! consumes it. Fractions are monotonically non-decreasing in [0, 1] and the
//! final chunk of a non-empty upload reports 1.0. Boundary/header overhead
//! is not counted; progress tracks payload bytes.

use crate::error::RequestError;
use bytes::Bytes;
use futures_util::Stream;
use futures_util::stream;
use reqwest::Body;
use reqwest::multipart::Part;
use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Progress callback: fraction of uploaded payload bytes in [0, 1].
pub type ProgressFn = Arc<dyn Fn(f64) + Send + Sync>;

const CHUNK_SIZE: usize = 64 * 1024;

/// One named payload for a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadPart {
    /// Form field name.
    pub name: String,
    /// Payload bytes.
    pub data: Vec<u8>,
    /// Optional file name for the part.
    pub file_name: Option<String>,
    /// Optional MIME type for the part.
    pub mime: Option<String>,
}

impl UploadPart {
    /// Create a part with a field name and payload.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
            file_name: None,
            mime: None,
        }
    }

    /// Attach a file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Attach a MIME type.
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

/// Chunk `data` and report cumulative progress as each chunk is yielded.
///
/// `sent` accumulates across all parts of one upload; `total` is the summed
/// payload length, so the fraction spans the whole form rather than a single
/// part.
fn counting_stream(
    data: Vec<u8>,
    sent: Arc<AtomicU64>,
    total: u64,
    on_progress: ProgressFn,
) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
    let chunks: Vec<Bytes> = data.chunks(CHUNK_SIZE).map(Bytes::copy_from_slice).collect();
    stream::iter(chunks.into_iter().map(move |chunk| {
        let so_far = sent.fetch_add(chunk.len() as u64, Ordering::Relaxed) + chunk.len() as u64;
        if total > 0 {
            on_progress((so_far as f64 / total as f64).min(1.0));
        }
        Ok(chunk)
    }))
}

/// Wrap a part's payload in a progress-counting stream.
pub(crate) fn progress_part(
    part: UploadPart,
    sent: Arc<AtomicU64>,
    total: u64,
    on_progress: ProgressFn,
) -> Result<Part, RequestError> {
    let len = part.data.len() as u64;
    let body = Body::wrap_stream(counting_stream(part.data, sent, total, on_progress));
    let mut built = Part::stream_with_length(body, len);
    if let Some(file_name) = part.file_name {
        built = built.file_name(file_name);
    }
    if let Some(mime) = part.mime {
        built = built
            .mime_str(&mime)
            .map_err(|e| RequestError::ConfigurationError(format!("invalid MIME type: {e}")))?;
    }
    Ok(built)
}
