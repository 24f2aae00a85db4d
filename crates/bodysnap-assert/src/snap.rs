//! Body snapshot assertion

use crate::errors::AssertionFailure;
use crate::response::HttpResponse;
use crate::Assertion;
use bodysnap_core::errors::SnapError;
use bodysnap_core::path::{redact_all, FieldPath};
use bodysnap_core::SnapshotKey;
use bodysnap_engine::{ShotOutcome, SnapshotEngine};

/// Snapshot the decoded body under `<name>-body`
///
/// Ignored paths are removed from the body object, or from every object
/// element of a body array, before the engine sees it.
#[derive(Debug, Clone)]
pub struct BodySnap<'e> {
    engine: &'e SnapshotEngine,
    key: SnapshotKey,
    ignored: Vec<FieldPath>,
}

impl<'e> BodySnap<'e> {
    /// # Errors
    ///
    /// `InvalidKey` if `name` does not make a valid snapshot key.
    pub fn new(engine: &'e SnapshotEngine, name: &str) -> Result<Self, SnapError> {
        Ok(Self {
            engine,
            key: SnapshotKey::for_body(name)?,
            ignored: Vec::new(),
        })
    }

    /// Leave `path` out of the snapshot.
    ///
    /// # Errors
    ///
    /// `InvalidPath` if `path` is empty or has an empty segment.
    pub fn ignore(mut self, path: &str) -> Result<Self, SnapError> {
        self.ignored.push(FieldPath::parse(path)?);
        Ok(self)
    }

    pub fn key(&self) -> &SnapshotKey {
        &self.key
    }

    /// Run the snapshot and return the engine's outcome.
    ///
    /// # Errors
    ///
    /// Any decode, redaction or engine error. A mismatch is an `Ok` outcome.
    pub fn shoot(&self, res: &HttpResponse) -> Result<ShotOutcome, SnapError> {
        let mut body = res.json()?;
        redact_all(&mut body, &self.ignored).map_err(|e| e.with_key(self.key.as_str()))?;
        tracing::debug!(
            key = self.key.as_str(),
            ignored = self.ignored.len(),
            url = res.url.as_str(),
            "body redacted for snapshot"
        );
        self.engine.shot(&self.key, &body)
    }
}

impl Assertion for BodySnap<'_> {
    fn check(&self, res: &HttpResponse) -> Result<(), AssertionFailure> {
        match self.shoot(res)? {
            ShotOutcome::Mismatch { diff } => Err(AssertionFailure::Snapshot {
                url: res.url.clone(),
                diff,
            }),
            ShotOutcome::Recorded | ShotOutcome::Updated | ShotOutcome::Matched => Ok(()),
        }
    }
}
