// Accent Analyzer Main Entry Point
// Copyright (c) 2026 Xing_The_Creator | SYNOID

use accent_analyzer::accent::AnalysisResult;
use accent_analyzer::analyzer::core::AnalyzerCore;
use accent_analyzer::analyzer::health;
use accent_analyzer::server;
use accent_analyzer::state::KernelState;
use accent_analyzer::window;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "accent-analyzer")]
#[command(about = "English accent analyzer for video metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the desktop window
    Gui,

    /// Fetch a video's title/description and classify the accent
    Analyze {
        /// YouTube (or other yt-dlp supported) URL
        #[arg(short, long)]
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify raw text without fetching anything
    Score {
        /// Text to score
        #[arg(short, long)]
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the Dashboard Web Server
    Serve {
        /// Port to run the server on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

fn print_result(result: &AnalysisResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("Detected Accent: {}", result.accent);
    println!("Confidence:      {:.1}%", result.confidence);
    println!("Note:            {}", result.note);
    println!();
    println!("Detailed Confidence Scores");
    println!("{}", result.confidence_details);
    Ok(())
}

async fn warn_missing_dependencies() {
    let missing = health::check_dependencies().await;
    if !missing.is_empty() {
        warn!("⚠️ Missing dependencies: {:?}. Video analysis will report Unknown.", missing);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Keep the GUI stack quiet unless explicitly overridden by the user.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,wgpu_core=error,wgpu_hal=error,naga=error,winit=error,eframe=warn");
    }
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());
        error!("[PANIC] at {}: {}", location, panic_info);
    }));

    let args = Cli::parse();

    match args.command {
        Commands::Score { text, json } => {
            let core = AnalyzerCore::from_env();
            print_result(&core.score_text(&text), json)?;
        }
        Commands::Analyze { url, json } => {
            warn_missing_dependencies().await;
            let core = AnalyzerCore::from_env();
            let result = core.analyze_video(&url).await;
            print_result(&result, json)?;
        }
        Commands::Serve { port } => {
            warn_missing_dependencies().await;
            info!("🌐 Starting Accent Analyzer dashboard on port {}...", port);
            let state = Arc::new(KernelState::new(AnalyzerCore::from_env()));
            server::start_server(port, state)
                .await
                .with_context(|| format!("dashboard server on port {} failed", port))?;
        }
        Commands::Gui => {
            warn_missing_dependencies().await;
            info!("🖥️ Launching GUI...");
            let core = AnalyzerCore::from_env();
            tokio::task::block_in_place(|| window::run_gui(core))
                .map_err(|e| anyhow::anyhow!("GUI error: {}", e))?;
            info!("🛑 GUI closed.");
        }
    }

    Ok(())
}
