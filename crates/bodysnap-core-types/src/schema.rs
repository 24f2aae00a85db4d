//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent across every crate that logs.
//! `tracing` macros need literal field names, so emitters spell them out and
//! the capture layer and log assertions read them back through these.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Snapshot identifiers
pub const FIELD_KEY: &str = "key";
pub const FIELD_OUTCOME: &str = "outcome";
pub const FIELD_SIZE_BYTES: &str = "size_bytes";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
