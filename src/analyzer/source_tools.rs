// Accent Analyzer Source Tools - Video Metadata Acquisition
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// This module currently handles:
// 1. Locating yt-dlp (standalone binary or python module)
// 2. Fetching title/description as JSON without downloading media
// 3. The MetadataFetcher seam the analyzer core talks to

use crate::analyzer::url_guard::UrlGuard;
use crate::error::FetchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 60;

/// Title and description of a video, the only text the scorer sees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl VideoMetadata {
    /// Space-joined, lower-cased text handed to the scorer.
    pub fn scoring_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// Anything that can turn a URL into video metadata.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<VideoMetadata, FetchError>;
}

/// Fetcher settings read from the environment.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Explicit downloader path, skips discovery.
    pub ytdlp_override: Option<String>,
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            ytdlp_override: None,
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

impl FetcherConfig {
    /// Reads `ACCENT_YTDLP` and `ACCENT_FETCH_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("ACCENT_YTDLP").ok(),
            std::env::var("ACCENT_FETCH_TIMEOUT_SECS").ok(),
        )
    }

    /// Builds the config from raw variable values. A blank override is
    /// ignored; a timeout that is not a positive whole number of seconds
    /// falls back to the default.
    pub fn from_vars(ytdlp: Option<String>, timeout: Option<String>) -> Self {
        let ytdlp_override = ytdlp
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let timeout_secs = match timeout {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        "[SOURCE] Ignoring invalid ACCENT_FETCH_TIMEOUT_SECS '{}', using {}s",
                        raw, DEFAULT_FETCH_TIMEOUT_SECS
                    );
                    DEFAULT_FETCH_TIMEOUT_SECS
                }
            },
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Self {
            ytdlp_override,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// How yt-dlp gets invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloaderCommand {
    /// A yt-dlp executable, run directly.
    Standalone(String),
    /// A python interpreter with the `yt_dlp` module, run as `-m yt_dlp`.
    Python(String),
}

impl DownloaderCommand {
    /// Classify a user-supplied path. Only a bare python interpreter gets
    /// the module form; any other executable (`yt-dlp_linux`, a wrapper
    /// script) is run as-is.
    pub fn from_override(path: &str) -> Self {
        let name = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(path);
        if matches!(name, "python" | "python3" | "py") {
            DownloaderCommand::Python(path.to_string())
        } else {
            DownloaderCommand::Standalone(path.to_string())
        }
    }

    pub fn program(&self) -> &str {
        match self {
            DownloaderCommand::Standalone(p) | DownloaderCommand::Python(p) => p,
        }
    }
}

async fn runs_ok(cmd: &str, args: &[&str]) -> bool {
    Command::new(cmd)
        .args(args)
        .output()
        .await
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Find a working yt-dlp: a standalone binary first, then a python
/// interpreter with the `yt_dlp` module. Returns `None` if neither exists.
pub async fn find_ytdlp_command() -> Option<DownloaderCommand> {
    let standalone_candidates = ["yt-dlp", "/usr/bin/yt-dlp", "/usr/local/bin/yt-dlp"];
    for bin in standalone_candidates {
        if runs_ok(bin, &["--version"]).await {
            info!("[SOURCE] Found standalone 'yt-dlp' at '{}'", bin);
            return Some(DownloaderCommand::Standalone(bin.to_string()));
        }
        debug!("[SOURCE] '{}' not usable", bin);
    }

    for python in ["python3", "python", "py"] {
        if runs_ok(python, &["-m", "yt_dlp", "--version"]).await {
            info!("[SOURCE] Found python with yt-dlp module: '{}'", python);
            return Some(DownloaderCommand::Python(python.to_string()));
        }
        debug!("[SOURCE] '{}' missing or has no yt-dlp module", python);
    }

    warn!("[SOURCE] No yt-dlp installation found");
    None
}

/// Check if yt-dlp is installed and accessible
pub async fn check_ytdlp() -> bool {
    find_ytdlp_command().await.is_some()
}

/// Arguments for a metadata-only yt-dlp run. The URL always follows `--`.
pub fn build_ytdlp_metadata_args(command: &DownloaderCommand, url: &str) -> Vec<String> {
    let mut args = Vec::new();

    if let DownloaderCommand::Python(_) = command {
        args.push("-m".to_string());
        args.push("yt_dlp".to_string());
    }

    args.extend_from_slice(&[
        "--dump-json".to_string(),
        "--skip-download".to_string(),
        "--no-warnings".to_string(),
        "--no-playlist".to_string(),
        "--".to_string(),
        url.to_string(),
    ]);

    args
}

/// Parse the JSON document printed by `--dump-json`.
pub fn parse_metadata(stdout: &str) -> Result<VideoMetadata, FetchError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(FetchError::new("downloader returned no metadata"));
    }
    // Only the first document matters if a playlist slipped through.
    let first = trimmed.lines().next().unwrap_or(trimmed);
    Ok(serde_json::from_str(first)?)
}

/// Production fetcher backed by the yt-dlp command line.
pub struct YtDlpFetcher {
    config: FetcherConfig,
    command: OnceCell<Option<DownloaderCommand>>,
}

impl YtDlpFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        Self {
            config,
            command: OnceCell::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(FetcherConfig::from_env())
    }

    async fn command(&self) -> Option<&DownloaderCommand> {
        self.command
            .get_or_init(|| async {
                match &self.config.ytdlp_override {
                    Some(path) => {
                        info!("[SOURCE] Using yt-dlp override '{}'", path);
                        Some(DownloaderCommand::from_override(path))
                    }
                    None => find_ytdlp_command().await,
                }
            })
            .await
            .as_ref()
    }
}

#[async_trait]
impl MetadataFetcher for YtDlpFetcher {
    async fn fetch(&self, url: &str) -> Result<VideoMetadata, FetchError> {
        let url = UrlGuard::validate_url(url).map_err(FetchError::new)?;

        let command = self
            .command()
            .await
            .ok_or_else(|| FetchError::new("yt-dlp is not installed"))?;
        let args = build_ytdlp_metadata_args(command, &url);

        info!("[SOURCE] Fetching metadata: {}", url);
        let output = tokio::time::timeout(
            self.config.timeout,
            Command::new(command.program())
                .kill_on_drop(true)
                .args(&args)
                .output(),
        )
        .await
        .map_err(|_| {
            FetchError::new(format!(
                "metadata fetch timed out after {}s",
                self.config.timeout.as_secs()
            ))
        })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr.trim();
            return Err(FetchError::new(if reason.is_empty() {
                format!("yt-dlp exited with {}", output.status)
            } else {
                reason.to_string()
            }));
        }

        let metadata = parse_metadata(&String::from_utf8_lossy(&output.stdout))?;
        info!("[SOURCE] Got metadata for '{}'", metadata.title);
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_ytdlp_metadata_args() {
        let python = DownloaderCommand::Python("python".to_string());
        let args = build_ytdlp_metadata_args(&python, "https://youtube.com/watch?v=123");
        assert_eq!(&args[..2], &["-m".to_string(), "yt_dlp".to_string()]);
        assert!(args.contains(&"--dump-json".to_string()));

        let standalone = DownloaderCommand::Standalone("/usr/local/bin/yt-dlp".to_string());
        let args_standalone = build_ytdlp_metadata_args(&standalone, "https://youtube.com");
        assert!(!args_standalone.contains(&"-m".to_string()));
    }

    #[test]
    fn test_release_binary_override_runs_standalone() {
        let command = DownloaderCommand::from_override("/opt/bin/yt-dlp_linux");
        assert_eq!(
            command,
            DownloaderCommand::Standalone("/opt/bin/yt-dlp_linux".to_string())
        );

        let args = build_ytdlp_metadata_args(&command, "https://youtu.be/abc");
        assert!(!args.contains(&"-m".to_string()));
        assert_eq!(args[0], "--dump-json");
        assert_eq!(args.last().unwrap(), "https://youtu.be/abc");

        for other in ["yt-dlp_macos", "C:\\tools\\yt-dlp.exe", "/home/me/bin/ytdl-wrapper"] {
            assert!(matches!(
                DownloaderCommand::from_override(other),
                DownloaderCommand::Standalone(_)
            ));
        }
    }

    #[test]
    fn test_python_override_uses_module_form() {
        for python in ["python", "/usr/bin/python3", "py", "python3.exe"] {
            let command = DownloaderCommand::from_override(python);
            assert_eq!(command, DownloaderCommand::Python(python.to_string()));
            assert_eq!(command.program(), python);
            let args = build_ytdlp_metadata_args(&command, "https://youtu.be/abc");
            assert_eq!(&args[..2], &["-m".to_string(), "yt_dlp".to_string()]);
        }
    }

    #[test]
    fn test_build_ytdlp_metadata_args_injection() {
        let command = DownloaderCommand::Standalone("yt-dlp".to_string());
        let args = build_ytdlp_metadata_args(&command, "-v");
        let separator_idx = args.iter().position(|a| a == "--").unwrap();
        let url_idx = args.iter().position(|a| a == "-v").unwrap();
        assert!(separator_idx < url_idx);
        assert_eq!(url_idx, args.len() - 1);
    }

    #[test]
    fn test_parse_metadata() {
        let json = r#"{"id":"abc","title":"G'day Sydney","description":"Arvo vlog","duration":12}"#;
        let meta = parse_metadata(json).unwrap();
        assert_eq!(meta.title, "G'day Sydney");
        assert_eq!(meta.description, "Arvo vlog");
        assert_eq!(meta.scoring_text(), "g'day sydney arvo vlog");
    }

    #[test]
    fn test_parse_metadata_null_and_missing_fields() {
        let meta = parse_metadata(r#"{"title":"Only a title","description":null}"#).unwrap();
        assert_eq!(meta.description, "");

        let meta = parse_metadata(r#"{"id":"x"}"#).unwrap();
        assert_eq!(meta, VideoMetadata::default());
    }

    #[test]
    fn test_parse_metadata_rejects_garbage() {
        assert!(parse_metadata("").is_err());
        let err = parse_metadata("ERROR: not json").unwrap_err();
        assert!(err.reason.starts_with("malformed metadata"));
    }

    #[test]
    fn test_fetcher_config_default_timeout() {
        let config = FetcherConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.ytdlp_override.is_none());
    }

    #[test]
    fn test_fetcher_config_reads_override() {
        let config = FetcherConfig::from_vars(Some("/opt/bin/yt-dlp_linux".to_string()), None);
        assert_eq!(config.ytdlp_override.as_deref(), Some("/opt/bin/yt-dlp_linux"));
        assert_eq!(config.timeout, Duration::from_secs(60));

        let config = FetcherConfig::from_vars(Some("   ".to_string()), None);
        assert!(config.ytdlp_override.is_none());

        let config = FetcherConfig::from_vars(Some(String::new()), None);
        assert!(config.ytdlp_override.is_none());
    }

    #[test]
    fn test_fetcher_config_timeout_parsing() {
        let config = FetcherConfig::from_vars(None, Some(" 15 ".to_string()));
        assert_eq!(config.timeout, Duration::from_secs(15));

        for bad in ["0", "abc", "-5", "1.5", ""] {
            let config = FetcherConfig::from_vars(None, Some(bad.to_string()));
            assert_eq!(config.timeout, Duration::from_secs(60), "value: {:?}", bad);
        }
    }

    #[tokio::test]
    async fn test_fetch_rejects_bad_url_without_spawning() {
        let fetcher = YtDlpFetcher::new(FetcherConfig {
            ytdlp_override: Some("/nonexistent/yt-dlp".to_string()),
            ..FetcherConfig::default()
        });
        let err = fetcher.fetch("javascript:alert(1)").await.unwrap_err();
        assert!(err.reason.contains("Blocked"));
    }

    #[tokio::test]
    async fn test_fetch_missing_binary_is_fetch_error() {
        let fetcher = YtDlpFetcher::new(FetcherConfig {
            ytdlp_override: Some("/nonexistent/yt-dlp".to_string()),
            ..FetcherConfig::default()
        });
        let err = fetcher
            .fetch("https://www.youtube.com/watch?v=abc")
            .await
            .unwrap_err();
        assert!(err.reason.contains("could not run downloader"));
    }
}
