//! bodysnap assert - response assertions over the snapshot engine
//!
//! Adapts an HTTP response (URL, body bytes, optional `Content-Length`) to:
//! - body snapshots with ignored fields ([`BodySnap`])
//! - per-field validators ([`FieldTest`] and the `field_is_*` predicates)
//! - plain body checks ([`BodyMatch`], [`BodyEquals`], [`BodyLength`], [`JsonEquals`])

pub mod body;
pub mod errors;
pub mod field;
pub mod json;
pub mod response;
pub mod snap;

pub use body::{BodyEquals, BodyLength, BodyMatch};
pub use errors::AssertionFailure;
pub use field::{
    field_is_bool, field_is_number, field_is_string, ignore_field, FieldFn, FieldTest,
};
pub use json::JsonEquals;
pub use response::HttpResponse;
pub use snap::BodySnap;

/// A check run against one response
pub trait Assertion: Send + Sync {
    /// Check the response.
    ///
    /// # Errors
    ///
    /// An [`AssertionFailure`] describing the first violated expectation.
    fn check(&self, res: &HttpResponse) -> Result<(), AssertionFailure>;
}

/// Run assertions in order; the first failure wins.
///
/// # Errors
///
/// The failure of the first assertion that does not hold.
pub fn check_all(res: &HttpResponse, assertions: &[&dyn Assertion]) -> Result<(), AssertionFailure> {
    assertions.iter().try_for_each(|a| a.check(res))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_all_stops_at_first_failure() {
        let res = HttpResponse::new("http://localhost/ping", "pong");
        let length = BodyLength::new(4);
        let wrong = BodyEquals::new("ping");
        let pattern = BodyMatch::new("^po").unwrap();

        assert!(check_all(&res, &[&length, &pattern]).is_ok());
        let err = check_all(&res, &[&length, &wrong, &pattern]).unwrap_err();
        assert!(err.to_string().contains("Bodies mismatch"), "{err}");
    }

    #[test]
    fn test_check_all_empty_is_ok() {
        let res = HttpResponse::new("http://localhost/", "");
        assert!(check_all(&res, &[]).is_ok());
    }
}
