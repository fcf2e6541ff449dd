// Accent Analyzer Library
// Copyright (c) 2026 Xing_The_Creator | SYNOID

pub mod accent;
pub mod analyzer;
pub mod error;
pub mod server;
pub mod state;
pub mod window;
