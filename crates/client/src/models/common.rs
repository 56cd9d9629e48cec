//! Common types shared across Chartio API models.
//!
//! This module contains the wire types every resource carries: the
//! navigation link map and the API's timestamp format. It does NOT contain
//! resource-specific models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::serde_helpers::{format_timestamp, parse_timestamp};

/// A single navigation link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Navigation links attached to resource and collection responses.
///
/// Any relation may be absent; a missing relation decodes to `None`, never
/// to an empty link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub current: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
}

impl Links {
    /// True when no relation is present.
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.next.is_none() && self.previous.is_none()
    }
}

/// An instant in the Chartio API's timestamp format.
///
/// The wire layout is `YYYY-MM-DDTHH:MM:SS[.ffffff]` with no timezone
/// designator; values are interpreted as UTC. Fields the API may omit or
/// null out are modeled as `Option<Timestamp>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse a wire-format string.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        parse_timestamp(s).map(Self)
    }

    /// Render in the wire format.
    pub fn to_wire(&self) -> String {
        format_timestamp(&self.0)
    }

    /// The underlying UTC instant.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}
