//! The response under test

use bodysnap_core::canonical::decode;
use bodysnap_core::errors::Result;
use serde_json::Value;
use std::borrow::Cow;

/// The parts of an HTTP response the assertions read
///
/// The body is held in memory, so every assertion sees the full bytes no
/// matter how many ran before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: String,
    pub body: Vec<u8>,
    pub content_length: Option<u64>,
}

impl HttpResponse {
    pub fn new(url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            content_length: None,
        }
    }

    /// Set the `Content-Length` header value
    pub fn with_content_length(mut self, length: u64) -> Self {
        self.content_length = Some(length);
        self
    }

    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON
    ///
    /// # Errors
    ///
    /// `Decode` if the body is empty or not valid JSON.
    pub fn json(&self) -> Result<Value> {
        decode(&self.body)
    }
}
