//! Test utilities for handler testing.
//!
//! Shared by this crate's unit tests and, through the `test-utils` feature,
//! by the Lambda crate's tests.
//!
//! # Usage
//!
//! ```ignore
//! use edge_echo_lib::test_utils::{body_of, fixed_now, TEST_FUNCTION_ARN};
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::envelope::ResponseEnvelope;

/// Function ARN whose region segment is `us-east-1`.
pub const TEST_FUNCTION_ARN: &str = "arn:aws:lambda:us-east-1:123456789012:function:foo";

/// A fixed instant so payload timestamps are deterministic.
///
/// Formats as `2024-05-01T12:30:00.000Z`.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
        .single()
        .expect("fixed test instant is unambiguous")
}

/// Parse an envelope body as untyped JSON.
pub fn body_of(envelope: &ResponseEnvelope) -> Value {
    envelope
        .parse_body()
        .expect("response body should be valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_now_formats_as_expected() {
        assert_eq!(
            fixed_now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2024-05-01T12:30:00.000Z"
        );
    }
}
