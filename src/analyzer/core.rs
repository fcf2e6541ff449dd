// Accent Analyzer Core
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Shared logic kernel behind the CLI, the dashboard and the GUI.
// Fetches metadata, scores it, and turns every fetch failure into
// an Unknown result so front-ends always have something to render.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

use crate::accent::{self, AnalysisResult};
use crate::analyzer::source_tools::{MetadataFetcher, YtDlpFetcher};
use crate::analyzer::url_guard::UrlGuard;

/// Log lines kept for the front-ends.
const MAX_LOG_LINES: usize = 200;

/// The shared state of the analyzer
#[derive(Clone)]
pub struct AnalyzerCore {
    fetcher: Arc<dyn MetadataFetcher>,
    // Observability State (Thread-safe, Sync for GUI)
    status: Arc<Mutex<String>>,
    logs: Arc<Mutex<Vec<String>>>,
    analyses: Arc<AtomicU64>,
}

impl AnalyzerCore {
    pub fn new(fetcher: Arc<dyn MetadataFetcher>) -> Self {
        Self {
            fetcher,
            status: Arc::new(Mutex::new("⚡ System Ready".to_string())),
            logs: Arc::new(Mutex::new(vec![
                "[SYSTEM] Accent Analyzer initialized.".to_string()
            ])),
            analyses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Core wired to the real yt-dlp fetcher, configured from the environment.
    pub fn from_env() -> Self {
        Self::new(Arc::new(YtDlpFetcher::from_env()))
    }

    // --- State Helpers ---

    pub fn set_status(&self, msg: &str) {
        if let Ok(mut status) = self.status.lock() {
            *status = msg.to_string();
        }
    }

    pub fn status(&self) -> String {
        self.status
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn log(&self, msg: &str) {
        info!("{}", msg);
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(msg.to_string());
            if logs.len() > MAX_LOG_LINES {
                let excess = logs.len() - MAX_LOG_LINES;
                logs.drain(..excess);
            }
        }
    }

    pub fn recent_logs(&self) -> Vec<String> {
        self.logs.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Number of analyses finished since startup, failed ones included.
    pub fn analyses_completed(&self) -> u64 {
        self.analyses.load(Ordering::Relaxed)
    }

    // --- Analysis ---

    /// Score raw text without touching the network.
    pub fn score_text(&self, text: &str) -> AnalysisResult {
        let result = accent::classify(text);
        self.analyses.fetch_add(1, Ordering::Relaxed);
        result
    }

    /// Fetch a video's metadata and classify it. Never fails.
    pub async fn analyze_video(&self, url: &str) -> AnalysisResult {
        self.set_status("Analyzing video...");
        self.log(&format!("[CORE] Analyzing {}", url.trim()));

        if !UrlGuard::is_video_platform(url.trim()) {
            warn!("[CORE] '{}' is not a known video platform, trying anyway", url.trim());
        }

        let result = match self.fetcher.fetch(url).await {
            Ok(metadata) => accent::classify(&metadata.scoring_text()),
            Err(e) => {
                error!("[CORE] Error analyzing video: {}", e);
                self.log(&format!("[CORE] ❌ {}", e));
                AnalysisResult::unknown(&e)
            }
        };

        self.analyses.fetch_add(1, Ordering::Relaxed);
        if result.is_unknown() {
            self.set_status("Analysis failed.");
        } else {
            self.log(&format!(
                "[CORE] ✅ {} ({:.1}%)",
                result.accent, result.confidence
            ));
            self.set_status("Analysis complete!");
        }
        result
    }
}
