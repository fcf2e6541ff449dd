// Accent Analyzer - Error Types
// Copyright (c) 2026 Xing_The_Creator | SYNOID

/// The single failure kind at the metadata boundary.
///
/// Network errors, rejected URLs, unavailable videos and unreadable
/// downloader output all collapse into this one type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fetch error: {reason}")]
pub struct FetchError {
    pub reason: String,
}

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        Self::new(format!("could not run downloader: {}", e))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("malformed metadata: {}", e))
    }
}
