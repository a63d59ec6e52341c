//! Request dispatch.
//!
//! The core adapter: issue one HTTP call described by an endpoint, decode
//! the response body with the given strategy, and route the outcome to the
//! caller's callbacks. Exactly one of the success/failure callbacks runs per
//! call, then the completion callback runs unconditionally. Configuration
//! errors abort before any callback fires.

use crate::client::Client;
use crate::decode::DecodeStrategy;
use crate::endpoint::{Endpoint, RequestBody};
use crate::error::RequestError;
use crate::headers::{build_headers, merge_headers};
use crate::progress::{ProgressFn, UploadPart, progress_part};
use crate::transport::TransportRequest;
use reqwest::Url;
use reqwest::header::HeaderMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

/// Per-call context carried through logging.
#[derive(Debug, Clone)]
struct CallContext {
    request_id: String,
    url: String,
}

impl CallContext {
    fn new(url: &Url) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            url: url.to_string(),
        }
    }
}

impl Client {
    /// Issue `endpoint` and route the decoded outcome.
    ///
    /// On transport failure the failure callback receives the transport's
    /// error text; on a non-2xx status it receives the status and body text;
    /// on a decode failure it receives the decoder's description. Otherwise
    /// the success callback receives the decoded model. The completion
    /// callback always runs last, exactly once.
    ///
    /// Returns `Err` without invoking any callback when the call cannot be
    /// constructed (empty/invalid base URL, unusable header value).
    pub async fn request<E, T, S, F, C>(
        &self,
        endpoint: &E,
        decode: DecodeStrategy<T>,
        on_success: S,
        on_failure: F,
        on_completed: C,
    ) -> crate::error::Result<()>
    where
        E: Endpoint + ?Sized,
        S: FnOnce(T),
        F: FnOnce(String),
        C: FnOnce(),
    {
        // 1. Construct the call; an unusable configuration is fatal here.
        let url = endpoint.url(&self.config)?;
        let headers = self.effective_headers(endpoint)?;
        let ctx = CallContext::new(&url);
        tracing::debug!(request_id = %ctx.request_id, "issuing {} {}", endpoint.method(), ctx.url);

        // 2. Issue, decode, route.
        let outcome = self.issue(endpoint, url, headers).await;
        finish(outcome, &decode, &ctx, on_success, on_failure);
        on_completed();
        Ok(())
    }

    /// Issue a multipart upload for `endpoint` and route the decoded outcome.
    ///
    /// Uploads always POST. `on_progress` observes monotonically
    /// non-decreasing fractions of the payload bytes in [0, 1], zero or more
    /// times, while the body streams out. Callback discipline matches
    /// [`Client::request`].
    #[allow(clippy::too_many_arguments)]
    pub async fn upload<E, T, S, F, C, P>(
        &self,
        endpoint: &E,
        parts: Vec<UploadPart>,
        decode: DecodeStrategy<T>,
        on_progress: P,
        on_success: S,
        on_failure: F,
        on_completed: C,
    ) -> crate::error::Result<()>
    where
        E: Endpoint + ?Sized,
        S: FnOnce(T),
        F: FnOnce(String),
        C: FnOnce(),
        P: Fn(f64) + Send + Sync + 'static,
    {
        // 1. Construct the call.
        let url = endpoint.url(&self.config)?;
        let mut headers = self.effective_headers(endpoint)?;
        // Multipart owns its boundary-based Content-Type; strip the JSON one.
        headers.remove(reqwest::header::CONTENT_TYPE);
        let ctx = CallContext::new(&url);
        tracing::debug!(request_id = %ctx.request_id, "uploading POST {}", ctx.url);

        // 2. Issue with a progress-counting body, decode, route.
        let outcome = self
            .issue_multipart(url, headers, parts, Arc::new(on_progress))
            .await;
        finish(outcome, &decode, &ctx, on_success, on_failure);
        on_completed();
        Ok(())
    }

    fn effective_headers<E: Endpoint + ?Sized>(
        &self,
        endpoint: &E,
    ) -> crate::error::Result<HeaderMap> {
        let base = build_headers(&self.config)?;
        let extra = endpoint.extra_headers();
        if extra.is_empty() {
            return Ok(base);
        }
        Ok(merge_headers(base, &extra))
    }

    async fn issue<E: Endpoint + ?Sized>(
        &self,
        endpoint: &E,
        url: Url,
        headers: HeaderMap,
    ) -> crate::error::Result<Vec<u8>> {
        let method = endpoint.method();
        let body = endpoint.body();

        if let Some(transport) = &self.transport {
            let response = transport
                .issue(TransportRequest {
                    method,
                    url: url.to_string(),
                    headers,
                    body: match body {
                        RequestBody::Json(json) => Some(json),
                        RequestBody::Empty => None,
                    },
                })
                .await?;
            return classify(response.status, response.body);
        }

        let mut rb = self.http.request(method, url).headers(headers);
        if let RequestBody::Json(json) = &body {
            rb = rb.json(json);
        }
        let resp = rb
            .send()
            .await
            .map_err(|e| RequestError::HttpError(e.to_string()))?;
        read_body(resp).await
    }

    async fn issue_multipart(
        &self,
        url: Url,
        headers: HeaderMap,
        parts: Vec<UploadPart>,
        on_progress: ProgressFn,
    ) -> crate::error::Result<Vec<u8>> {
        let total: u64 = parts.iter().map(|p| p.data.len() as u64).sum();
        let sent = Arc::new(AtomicU64::new(0));
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            let name = part.name.clone();
            form = form.part(
                name,
                progress_part(part, sent.clone(), total, on_progress.clone())?,
            );
        }

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RequestError::HttpError(e.to_string()))?;
        read_body(resp).await
    }
}

/// Decode a successful outcome and fire exactly one of the two callbacks.
fn finish<T, S, F>(
    outcome: crate::error::Result<Vec<u8>>,
    decode: &DecodeStrategy<T>,
    ctx: &CallContext,
    on_success: S,
    on_failure: F,
) where
    S: FnOnce(T),
    F: FnOnce(String),
{
    match outcome {
        Ok(body) => match decode.decode(&body) {
            Ok(model) => on_success(model),
            Err(e) => {
                tracing::warn!(request_id = %ctx.request_id, "decode failed for {}: {e}", ctx.url);
                on_failure(e.to_string());
            }
        },
        Err(e) => {
            tracing::warn!(request_id = %ctx.request_id, "request failed for {}: {e}", ctx.url);
            on_failure(e.to_string());
        }
    }
}

/// Read a reqwest response: classify non-2xx, return raw bytes otherwise.
async fn read_body(resp: reqwest::Response) -> crate::error::Result<Vec<u8>> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(api_failure(
            status.as_u16(),
            &text,
            status.canonical_reason(),
        ));
    }
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| RequestError::HttpError(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// Classify an injected-transport response by status.
fn classify(status: u16, body: Vec<u8>) -> crate::error::Result<Vec<u8>> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    let text = String::from_utf8_lossy(&body);
    let fallback = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason());
    Err(api_failure(status, &text, fallback))
}

fn api_failure(status: u16, body_text: &str, fallback: Option<&str>) -> RequestError {
    let message = if body_text.trim().is_empty() {
        fallback.unwrap_or("request failed").to_string()
    } else {
        body_text.to_string()
    };
    RequestError::api_error(status, message)
}
