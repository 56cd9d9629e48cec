//! Serde helpers for Chartio's wire formats.
//!
//! Responsibilities:
//! - Parse and format the API's timestamp strings, which carry no timezone
//!   designator and a variable-length fractional second.
//! - Keep wire-format knowledge centralized so model definitions stay
//!   readable and consistent.
//!
//! Explicitly does NOT handle:
//! - Link map decoding (plain serde derives with defaults cover it).
//! - Validating higher-level semantics of decoded values.
//!
//! Invariants / assumptions:
//! - Wire timestamps match `YYYY-MM-DDTHH:MM:SS[.ffffff]` with zero to six
//!   fractional digits and are interpreted as UTC.
//! - Formatting then parsing a timestamp yields the same instant.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Timestamp layout used by the Chartio API. `%.f` accepts a missing
/// fraction as well as a variable number of digits, covering the zero to
/// six digit range the API emits.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a wire timestamp into a UTC instant.
pub(crate) fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map(|naive| Utc.from_utc_datetime(&naive))
}

/// Format a UTC instant in the API's wire layout.
pub(crate) fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.naive_utc().format(TIMESTAMP_FORMAT).to_string()
}
