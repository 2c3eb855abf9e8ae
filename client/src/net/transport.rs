//! Raw HTTP transport beneath the API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Transport`] moves a fully-formed [`HttpRequest`] over the wire and
//! reports either a status + body or a local failure. It knows nothing about
//! credentials or status semantics; those live in `net::client`. The browser
//! implementation uses `gloo-net` and races each request against a
//! `gloo-timers` timeout. Native builds get a stub that always reports a
//! network failure, mirroring the hydrate/SSR split used across the crate.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

/// HTTP methods used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One file field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,
    /// Pre-serialized JSON text.
    Json(String),
    /// Multipart form; the transport chooses the boundary and content type.
    Multipart(Vec<FilePart>),
}

/// A request ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), headers: Vec::new(), body: Body::Empty }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self { method: Method::Post, url: url.into(), headers: Vec::new(), body: Body::Empty }
    }

    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Set `name` to `value`, replacing any existing value (case-insensitive).
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }

    /// 2xx only.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures that happen before any response arrives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// Sends requests over the wire. Enables fakes in tests.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Dispatch `request` and wait for its status and body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response is received in time.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Browser `fetch` transport with a fixed per-request timeout.
#[derive(Debug, Clone, Copy)]
pub struct FetchTransport {
    timeout: Duration,
}

impl FetchTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let exchange = Box::pin(fetch(request));
            let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
            let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(millis));
            match select(exchange, deadline).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(TransportError::Timeout(self.timeout)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Network("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::RequestBuilder;

    let network = |e: gloo_net::Error| TransportError::Network(e.to_string());

    let mut builder = match request.method {
        Method::Get => RequestBuilder::new(&request.url).method(gloo_net::http::Method::GET),
        Method::Post => RequestBuilder::new(&request.url).method(gloo_net::http::Method::POST),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match request.body {
        Body::Empty => builder.build().map_err(network)?,
        Body::Json(text) => builder.body(text).map_err(network)?,
        Body::Multipart(parts) => builder.body(multipart_form(&parts)?).map_err(network)?,
    };

    let response = prepared.send().await.map_err(network)?;
    let status = response.status();
    let body = response.binary().await.map_err(network)?;
    Ok(HttpResponse { status, body })
}

#[cfg(feature = "hydrate")]
fn multipart_form(parts: &[FilePart]) -> Result<web_sys::FormData, TransportError> {
    let js_err = |e: wasm_bindgen::JsValue| TransportError::Network(format!("{e:?}"));

    let form = web_sys::FormData::new().map_err(js_err)?;
    for part in parts {
        let bytes = js_sys::Uint8Array::from(part.bytes.as_slice());
        let chunks = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&part.content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options).map_err(js_err)?;
        form.append_with_blob_and_filename(&part.field, &blob, &part.file_name)
            .map_err(js_err)?;
    }
    Ok(form)
}
