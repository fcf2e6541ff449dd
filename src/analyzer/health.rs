// Accent Analyzer Health Check
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Startup probe for external tools the analyzer shells out to.

use crate::analyzer::source_tools::{self, FetcherConfig};
use tracing::info;

/// Names of external tools that could not be found.
pub async fn check_dependencies() -> Vec<&'static str> {
    missing_tools(&FetcherConfig::from_env()).await
}

async fn missing_tools(config: &FetcherConfig) -> Vec<&'static str> {
    let mut missing = Vec::new();

    // An explicit downloader path is trusted; discovery only runs without one.
    if config.ytdlp_override.is_none() && !source_tools::check_ytdlp().await {
        missing.push("yt-dlp");
    }

    if missing.is_empty() {
        info!("[HEALTH] All external dependencies found");
    }
    missing
}
