// Accent Analyzer - URL Guard
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Screens user-supplied URLs before they reach the downloader. Anything
// rejected here never spawns a process.

use tracing::{info, warn};
use url::Url;

/// Schemes that are never handed to the downloader, even if they parse.
const BLOCKED_SCHEMES: &[&str] = &["data", "javascript", "file"];

pub struct UrlGuard;

impl UrlGuard {
    /// Validate a URL before fetching. Returns the trimmed URL if safe.
    pub fn validate_url(raw: &str) -> Result<String, String> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err("No URL provided".to_string());
        }

        // A leading dash would be read as a flag by the downloader.
        if trimmed.starts_with('-') {
            warn!("[GUARD] Blocked flag-like input: {}", trimmed);
            return Err(format!("Not a URL: {}", trimmed));
        }

        let parsed = Url::parse(trimmed).map_err(|e| format!("Invalid URL '{}': {}", trimmed, e))?;
        let scheme = parsed.scheme();

        if BLOCKED_SCHEMES.contains(&scheme) {
            warn!("[GUARD] Blocked injection URI scheme: {}", trimmed);
            return Err(format!("Blocked URI scheme '{}'", scheme));
        }

        if scheme != "https" && scheme != "http" {
            warn!("[GUARD] Blocked unsupported scheme: {}", trimmed);
            return Err(format!("Unsupported protocol '{}', only HTTP(S) allowed", scheme));
        }

        if parsed.host_str().map(str::is_empty).unwrap_or(true) {
            return Err(format!("URL has no host: {}", trimmed));
        }

        info!("[GUARD] URL passed check: {}", trimmed);
        Ok(trimmed.to_string())
    }

    /// True for hosts yt-dlp is expected to handle well.
    pub fn is_video_platform(url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let host = parsed.host_str().unwrap_or("");

        host == "youtube.com"
            || host.ends_with(".youtube.com")
            || host == "youtu.be"
            || host == "vimeo.com"
            || host.ends_with(".vimeo.com")
    }
}
