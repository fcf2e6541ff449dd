// Accent Analyzer Modules
// Copyright (c) 2026 Xing_The_Creator | SYNOID

pub mod core;
pub mod health;
pub mod source_tools;
pub mod url_guard;
