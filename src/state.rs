use serde::{Deserialize, Serialize};

use crate::analyzer::core::AnalyzerCore;

pub struct KernelState {
    pub core: AnalyzerCore,
}

impl KernelState {
    pub fn new(core: AnalyzerCore) -> Self {
        Self { core }
    }
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct DashboardStatus {
    pub status: String,
    pub analyses: u64,
    /// Activity log, oldest first.
    pub logs: Vec<String>,
}
