use chrono::{DateTime, Utc};
use std::fmt;

/// Link-layer framing of a captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    Ethernet,
    RawIp,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Ethernet => "ethernet",
            LinkType::RawIp => "raw",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One frame as handed over by a capture source, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub timestamp: DateTime<Utc>,
    pub link_type: LinkType,
    pub data: Vec<u8>,
}

impl RawFrame {
    pub fn new(timestamp: DateTime<Utc>, link_type: LinkType, data: Vec<u8>) -> Self {
        Self {
            timestamp,
            link_type,
            data,
        }
    }

    pub fn ethernet(timestamp: DateTime<Utc>, data: Vec<u8>) -> Self {
        Self::new(timestamp, LinkType::Ethernet, data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Capture time in the document's fixed layout, always with nanosecond
/// precision, e.g. `2024-03-01 12:00:00.500000000 +0000 UTC`.
pub fn format_capture_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S%.9f +0000 UTC").to_string()
}
