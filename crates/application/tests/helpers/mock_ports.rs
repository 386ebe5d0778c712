#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use ferrous_sniffer_application::ports::{DocumentSink, FrameSource, PacketNormalizer};
use ferrous_sniffer_domain::{
    format_capture_time, DecodeError, DomainError, PacketDocument, RawFrame,
};
use std::collections::VecDeque;
use std::sync::Mutex;

pub const MALFORMED_MARKER: u8 = 0xEE;
pub const GARBAGE_MARKER: u8 = 0xFF;

/// Frame whose first byte steers `MockNormalizer`.
pub fn frame(marker: u8, second: u32) -> RawFrame {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, second).unwrap();
    RawFrame::ethernet(ts, vec![marker, 0, 0, 0])
}

pub struct MockFrameSource {
    frames: Mutex<VecDeque<Result<RawFrame, DomainError>>>,
    reads: Mutex<u64>,
}

impl MockFrameSource {
    pub fn new(frames: Vec<RawFrame>) -> Self {
        Self {
            frames: Mutex::new(frames.into_iter().map(Ok).collect()),
            reads: Mutex::new(0),
        }
    }

    pub fn push_error(&self, error: DomainError) {
        self.frames.lock().unwrap().push_back(Err(error));
    }

    pub fn reads(&self) -> u64 {
        *self.reads.lock().unwrap()
    }
}

#[async_trait]
impl FrameSource for MockFrameSource {
    async fn next_frame(&self) -> Result<Option<RawFrame>, DomainError> {
        *self.reads.lock().unwrap() += 1;
        match self.frames.lock().unwrap().pop_front() {
            Some(Ok(frame)) => Ok(Some(frame)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

pub struct MockNormalizer;

impl PacketNormalizer for MockNormalizer {
    fn normalize(&self, frame: &RawFrame) -> Result<PacketDocument, DomainError> {
        match frame.data.first() {
            Some(&MALFORMED_MARKER) => Err(DomainError::Decode(DecodeError::MalformedMessage(
                "truncated".to_string(),
            ))),
            Some(&GARBAGE_MARKER) => Err(DomainError::InvalidFrame("garbage".to_string())),
            _ => Ok(PacketDocument::new(format_capture_time(&frame.timestamp))),
        }
    }
}

pub struct MockDocumentSink {
    published: Mutex<Vec<PacketDocument>>,
    fail_after: Option<usize>,
    flushed: Mutex<bool>,
}

impl MockDocumentSink {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail_after: None,
            flushed: Mutex::new(false),
        }
    }

    pub fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Self::new()
        }
    }

    pub fn published(&self) -> Vec<PacketDocument> {
        self.published.lock().unwrap().clone()
    }

    pub fn was_flushed(&self) -> bool {
        *self.flushed.lock().unwrap()
    }
}

#[async_trait]
impl DocumentSink for MockDocumentSink {
    async fn publish(&self, document: &PacketDocument) -> Result<(), DomainError> {
        let mut published = self.published.lock().unwrap();
        if self.fail_after.is_some_and(|limit| published.len() >= limit) {
            return Err(DomainError::OutputError("sink closed".to_string()));
        }
        published.push(document.clone());
        Ok(())
    }

    async fn flush(&self) -> Result<(), DomainError> {
        *self.flushed.lock().unwrap() = true;
        Ok(())
    }
}
