//! Plain body assertions

use crate::errors::AssertionFailure;
use crate::response::HttpResponse;
use crate::Assertion;
use bodysnap_core::errors::{SnapError, SnapErrorKind};
use regex::Regex;

/// Body contains a match for a regular expression
#[derive(Debug, Clone)]
pub struct BodyMatch {
    pattern: Regex,
}

impl BodyMatch {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// `Internal` carrying the regex error if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, SnapError> {
        let pattern = Regex::new(pattern).map_err(|e| {
            SnapError::new(SnapErrorKind::Internal)
                .with_op("body_match")
                .with_message(format!("invalid body pattern: {}", e))
        })?;
        Ok(Self { pattern })
    }
}

impl Assertion for BodyMatch {
    fn check(&self, res: &HttpResponse) -> Result<(), AssertionFailure> {
        if self.pattern.is_match(&res.body_text()) {
            return Ok(());
        }
        Err(AssertionFailure::body(format!(
            "Body mismatch: pattern not found '{}'",
            self.pattern.as_str()
        )))
    }
}

/// Body equals a string, ignoring one trailing line feed
#[derive(Debug, Clone)]
pub struct BodyEquals {
    expected: String,
}

impl BodyEquals {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Assertion for BodyEquals {
    fn check(&self, res: &HttpResponse) -> Result<(), AssertionFailure> {
        let text = res.body_text();
        let have = text.strip_suffix('\n').unwrap_or(&text);
        if have == self.expected {
            return Ok(());
        }
        Err(AssertionFailure::body(format!(
            "Bodies mismatch:\n\thave: {:?}\n\twant: {:?}",
            text, self.expected
        )))
    }
}

/// Body length in bytes
///
/// A non-zero `Content-Length` is trusted; otherwise the body is measured.
#[derive(Debug, Clone, Copy)]
pub struct BodyLength {
    expected: u64,
}

impl BodyLength {
    pub fn new(expected: u64) -> Self {
        Self { expected }
    }
}

impl Assertion for BodyLength {
    fn check(&self, res: &HttpResponse) -> Result<(), AssertionFailure> {
        let actual = match res.content_length {
            Some(length) if length > 0 => length,
            _ => res.body.len() as u64,
        };
        if actual == self.expected {
            return Ok(());
        }
        Err(AssertionFailure::body(format!(
            "Body length mismatch: '{}' should be equal to '{}'",
            actual, self.expected
        )))
    }
}
