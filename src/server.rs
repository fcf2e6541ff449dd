use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::accent::AnalysisResult;
use crate::state::{AnalyzeRequest, DashboardStatus, KernelState, ScoreRequest};

pub type AppState = Arc<KernelState>;

const INDEX_HTML: &str = include_str!("../dashboard/index.html");

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/status", get(get_status))
        .route("/api/analyze", post(handle_analyze))
        .route("/api/score", post(handle_score))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

pub async fn start_server(port: u16, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let display_addr = if addr.ip().is_unspecified() {
        format!("127.0.0.1:{}", port)
    } else {
        addr.to_string()
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 [SERVER] Accent Analyzer running on http://{}", display_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn get_status(State(state): State<AppState>) -> Json<DashboardStatus> {
    Json(DashboardStatus {
        status: state.core.status(),
        analyses: state.core.analyses_completed(),
        logs: state.core.recent_logs(),
    })
}

// Failures come back as 200 with the Unknown result so the page can render them inline.
async fn handle_analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    info!("[SERVER] Analyze request: {}", payload.url);
    Json(state.core.analyze_video(&payload.url).await)
}

async fn handle_score(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Json<AnalysisResult> {
    Json(state.core.score_text(&payload.text))
}
