use bodysnap_core_types::InvalidKey;

/// Result type alias using SnapError
pub type Result<T> = std::result::Result<T, SnapError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure raised by the encoder, path resolver, diff renderer, store
/// or engine is classified by one of these kinds. Each kind maps to a stable
/// error code usable in tests and in CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapErrorKind {
    // JSON
    /// Candidate or stored bytes are not valid JSON
    Decode,
    /// A value could not be encoded to canonical JSON
    Encode,

    // Field paths
    /// A field path does not resolve (missing key or non-object intermediate)
    PathNotFound,
    /// A field path string is malformed (empty, or has an empty segment)
    InvalidPath,
    /// Top-level value is neither an object nor an array of objects
    UnsupportedShape,

    // Store
    /// A snapshot key is empty, absolute, or contains traversal segments
    InvalidKey,
    /// No snapshot is stored for the key
    NotFound,
    /// Filesystem failure (permission, disk, rename)
    Io,

    // Internal
    Internal,
}

impl SnapErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            SnapErrorKind::Decode => "ERR_DECODE",
            SnapErrorKind::Encode => "ERR_ENCODE",
            SnapErrorKind::PathNotFound => "ERR_PATH_NOT_FOUND",
            SnapErrorKind::InvalidPath => "ERR_INVALID_PATH",
            SnapErrorKind::UnsupportedShape => "ERR_UNSUPPORTED_SHAPE",
            SnapErrorKind::InvalidKey => "ERR_INVALID_KEY",
            SnapErrorKind::NotFound => "ERR_NOT_FOUND",
            SnapErrorKind::Io => "ERR_IO",
            SnapErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for programmatic handling plus optional context (operation,
/// snapshot key, field path, offending shape) for failure messages.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapError {
    kind: SnapErrorKind,
    op: Option<String>,
    key: Option<String>,
    path: Option<String>,
    shape: Option<String>,
    message: String,
}

impl SnapError {
    /// Create a new error with the specified kind
    pub fn new(kind: SnapErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key: None,
            path: None,
            shape: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snapshot key context
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add field path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add the name of the offending JSON shape
    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> SnapErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the snapshot key context, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Get the field path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the offending shape name, if any (populated on UnsupportedShape)
    pub fn shape(&self) -> Option<&str> {
        self.shape.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SnapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(shape) = &self.shape {
            write!(f, " (shape: {})", shape)?;
        }
        Ok(())
    }
}

impl std::error::Error for SnapError {}

// ========== End Error Facility ==========

/// Conversion from a rejected snapshot key
impl From<InvalidKey> for SnapError {
    fn from(err: InvalidKey) -> Self {
        SnapError::new(SnapErrorKind::InvalidKey).with_message(err.to_string())
    }
}

/// Create a decode error from a serde_json failure
pub fn decode_error(op: &str, err: serde_json::Error) -> SnapError {
    SnapError::new(SnapErrorKind::Decode)
        .with_op(op)
        .with_message(format!("failed to decode JSON: {}", err))
}

/// Create an encode error from a serde_json failure
pub fn encode_error(op: &str, err: serde_json::Error) -> SnapError {
    SnapError::new(SnapErrorKind::Encode)
        .with_op(op)
        .with_message(format!("failed to encode JSON: {}", err))
}

/// Create a path-not-found error
pub fn path_not_found(path: &str, reason: impl Into<String>) -> SnapError {
    SnapError::new(SnapErrorKind::PathNotFound)
        .with_path(path)
        .with_message(format!("couldn't find item at path: {}: {}", path, reason.into()))
}

/// Create an unsupported-shape error carrying the shape name
pub fn unsupported_shape(op: &str, shape: &str) -> SnapError {
    SnapError::new(SnapErrorKind::UnsupportedShape)
        .with_op(op)
        .with_shape(shape)
        .with_message(format!(
            "expected an object or an array of objects, got {}",
            shape
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (SnapErrorKind::Decode, "ERR_DECODE"),
            (SnapErrorKind::Encode, "ERR_ENCODE"),
            (SnapErrorKind::PathNotFound, "ERR_PATH_NOT_FOUND"),
            (SnapErrorKind::InvalidPath, "ERR_INVALID_PATH"),
            (SnapErrorKind::UnsupportedShape, "ERR_UNSUPPORTED_SHAPE"),
            (SnapErrorKind::InvalidKey, "ERR_INVALID_KEY"),
            (SnapErrorKind::NotFound, "ERR_NOT_FOUND"),
            (SnapErrorKind::Io, "ERR_IO"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = SnapError::new(SnapErrorKind::NotFound)
            .with_op("store_read")
            .with_key("users-body")
            .with_message("snapshot not found");
        assert_eq!(
            err.to_string(),
            "[ERR_NOT_FOUND] in operation 'store_read': snapshot not found (key: users-body)"
        );
    }

    #[test]
    fn test_unsupported_shape_carries_shape() {
        let err = unsupported_shape("shot", "string");
        assert_eq!(err.kind(), SnapErrorKind::UnsupportedShape);
        assert_eq!(err.shape(), Some("string"));
    }

    #[test]
    fn test_invalid_key_conversion() {
        let err: SnapError = InvalidKey::Empty.into();
        assert_eq!(err.kind(), SnapErrorKind::InvalidKey);
        assert!(err.message().contains("empty"));
    }

    #[test]
    fn test_context_none_by_default() {
        let err = SnapError::new(SnapErrorKind::Io);
        assert!(err.op().is_none());
        assert!(err.key().is_none());
        assert!(err.path().is_none());
        assert!(err.shape().is_none());
    }
}
