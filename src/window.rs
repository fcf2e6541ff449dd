// Accent Analyzer Desktop GUI
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// One window: URL field, analyze button, and the result in two columns.

use eframe::egui;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::accent::{Accent, AnalysisResult};
use crate::analyzer::core::AnalyzerCore;

// --- Color Palette ---
const COLOR_BG_DARK: egui::Color32 = egui::Color32::from_rgb(26, 26, 26);
const COLOR_PANEL_BG: egui::Color32 = egui::Color32::from_rgb(34, 34, 34);
const COLOR_ACCENT_ORANGE: egui::Color32 = egui::Color32::from_rgb(255, 120, 50);
const COLOR_ACCENT_BLUE: egui::Color32 = egui::Color32::from_rgb(50, 150, 255);
const COLOR_ERROR_RED: egui::Color32 = egui::Color32::from_rgb(255, 80, 80);

#[derive(Default, Clone)]
pub struct AnalysisTask {
    pub url: String,
    pub status: String,
    pub is_running: bool,
    pub result: Option<AnalysisResult>,
}

pub struct AnalyzerApp {
    task: Arc<Mutex<AnalysisTask>>,
    core: AnalyzerCore,
}

impl AnalyzerApp {
    pub fn new(core: AnalyzerCore) -> Self {
        let task = AnalysisTask {
            status: "System Ready.".to_string(),
            ..AnalysisTask::default()
        };
        Self {
            task: Arc::new(Mutex::new(task)),
            core,
        }
    }

    fn configure_style(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = COLOR_BG_DARK;
        visuals.panel_fill = COLOR_PANEL_BG;
        visuals.widgets.active.bg_fill = COLOR_ACCENT_ORANGE;
        visuals.selection.bg_fill = COLOR_ACCENT_ORANGE;
        ctx.set_visuals(visuals);
    }

    fn start_analysis(&self, url: String) {
        let task = self.task.clone();
        let core = self.core.clone();

        thread::spawn(move || {
            let result = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(core.analyze_video(&url)),
                Err(e) => AnalysisResult::unknown(format!("could not start runtime: {}", e)),
            };

            if let Ok(mut t) = task.lock() {
                t.status = if result.is_unknown() {
                    "Analysis failed.".to_string()
                } else {
                    "Analysis complete!".to_string()
                };
                t.result = Some(result);
                t.is_running = false;
            }
        });
    }
}

fn result_columns(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.columns(2, |columns| {
        columns[0].heading("Accent Analysis");
        columns[0].group(|ui| {
            ui.set_width(ui.available_width());
            ui.label("Detected Accent");
            ui.label(egui::RichText::new(result.accent.label()).size(26.0).strong());
            ui.label("Confidence");
            ui.label(
                egui::RichText::new(format!("{:.1}%", result.confidence))
                    .size(26.0)
                    .strong(),
            );
            ui.add_space(10.0);
            let color = if result.accent == Accent::Unknown {
                COLOR_ERROR_RED
            } else {
                COLOR_ACCENT_BLUE
            };
            ui.label(egui::RichText::new(&result.note).color(color));
        });

        columns[1].heading("Detailed Confidence Scores");
        columns[1].group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&result.confidence_details).monospace());
        });
    });
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.configure_style(ctx);

        // Side panels must be laid out before the central panel.
        let latest = self.task.lock().ok().and_then(|t| t.result.clone());
        if let Some(result) = &latest {
            egui::TopBottomPanel::bottom("results")
                .resizable(false)
                .show(ctx, |ui| {
                    ui.add_space(10.0);
                    result_columns(ui, result);
                    ui.add_space(10.0);
                });
        }

        let mut launch = None;
        let is_running = {
            let Ok(mut task) = self.task.lock() else {
                return;
            };

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(
                    egui::RichText::new("English Accent Analyzer")
                        .color(COLOR_ACCENT_ORANGE)
                        .size(28.0)
                        .strong(),
                );
                ui.label("Analyzes English accents from YouTube videos using keyword analysis.");
                ui.separator();

                ui.label("Enter a YouTube URL:");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut task.url)
                            .hint_text("https://www.youtube.com/watch?v=...")
                            .desired_width(500.0),
                    );
                    let can_run = !task.is_running && !task.url.trim().is_empty();
                    if ui
                        .add_enabled(can_run, egui::Button::new("Analyze Accent"))
                        .clicked()
                    {
                        task.is_running = true;
                        task.status = "Analyzing video...".to_string();
                        launch = Some(task.url.clone());
                    }
                });
                ui.label(egui::RichText::new(&task.status).color(COLOR_ACCENT_BLUE));
            });

            task.is_running
        };

        if let Some(url) = launch {
            self.start_analysis(url);
        }

        if is_running {
            ctx.request_repaint();
        }
    }
}

pub fn run_gui(core: AnalyzerCore) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("English Accent Analyzer"),
        ..Default::default()
    };

    eframe::run_native(
        "English Accent Analyzer",
        options,
        Box::new(move |_cc| Ok(Box::new(AnalyzerApp::new(core)))),
    )
}
