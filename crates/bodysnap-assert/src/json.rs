//! Whole-body JSON equality

use crate::errors::AssertionFailure;
use crate::response::HttpResponse;
use crate::Assertion;
use bodysnap_core::canonical::encode;
use serde_json::Value;

/// Body decodes to exactly the expected JSON value
///
/// Key order is irrelevant on both sides. Numbers compare by value, so `1`
/// equals `1.0`. An empty body compares as `null`.
#[derive(Debug, Clone)]
pub struct JsonEquals {
    expected: Value,
}

impl JsonEquals {
    pub fn new(expected: Value) -> Self {
        Self { expected }
    }
}

impl Assertion for JsonEquals {
    fn check(&self, res: &HttpResponse) -> Result<(), AssertionFailure> {
        let have = if res.body.is_empty() {
            Value::Null
        } else {
            res.json()?
        };
        if same_json(&have, &self.expected) {
            return Ok(());
        }
        let have = String::from_utf8_lossy(&encode(&have)?).into_owned();
        let want = String::from_utf8_lossy(&encode(&self.expected)?).into_owned();
        Err(AssertionFailure::body(format!(
            "JSON mismatch:\n\thave: {}\n\twant: {}",
            have, want
        )))
    }
}

fn same_json(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_json(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| same_json(x, y)))
        }
        _ => a == b,
    }
}
