// Accent Analyzer - Keyword Scorer
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Counts lexicon hits per category, applies the base offset and the
// weak-signal default bias, then normalizes everything to percentages.

use super::Accent;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

/// Tuning knobs for the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Added to every category so no score is zero.
    pub base_offset: f64,
    /// Total adjusted score below which the signal counts as weak.
    pub weak_signal_threshold: f64,
    /// Bonus given to `default_accent` when the signal is weak.
    pub default_bias_bonus: f64,
    pub default_accent: Accent,
    /// Percentage a category must exceed to count toward a mixed accent.
    pub mixed_threshold_pct: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_offset: 0.1,
            weak_signal_threshold: 1.5,
            default_bias_bonus: 0.3,
            default_accent: Accent::American,
            mixed_threshold_pct: 30.0,
        }
    }
}

/// One row of the per-category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccentShare {
    pub accent: Accent,
    pub percent: f64,
}

/// Outcome of a single analysis. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub accent: Accent,
    /// Share of the top category, 0..=100.
    pub confidence: f64,
    pub note: String,
    /// Highest share first.
    pub breakdown: Vec<AccentShare>,
    pub confidence_details: String,
}

impl AnalysisResult {
    /// Result shown when the video could not be analyzed.
    pub fn unknown(reason: impl Display) -> Self {
        Self {
            accent: Accent::Unknown,
            confidence: 0.0,
            note: format!("Error analyzing video: {}", reason),
            breakdown: Vec::new(),
            confidence_details: "Could not analyze video content".to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.accent == Accent::Unknown
    }
}

/// Classify `text` with the default scoring constants.
pub fn classify(text: &str) -> AnalysisResult {
    classify_with(text, &ScoringConfig::default())
}

/// Lexicon phrases found in already lower-cased `text`, per scored category.
fn lexicon_hits(text: &str) -> [(Accent, Vec<&'static str>); 4] {
    Accent::SCORED.map(|accent| (accent, accent.matches(text).collect()))
}

pub fn classify_with(text: &str, config: &ScoringConfig) -> AnalysisResult {
    let text = text.to_lowercase();

    let matched = lexicon_hits(&text);

    let mut scores: [(Accent, f64); 4] = Accent::SCORED.map(|accent| (accent, config.base_offset));
    for ((_, score), (_, hits)) in scores.iter_mut().zip(&matched) {
        *score += hits.len() as f64;
    }

    let total: f64 = scores.iter().map(|(_, s)| s).sum();
    if total < config.weak_signal_threshold {
        if let Some((_, s)) = scores.iter_mut().find(|(a, _)| *a == config.default_accent) {
            *s += config.default_bias_bonus;
        }
    }

    // Strictly greater wins, so the earlier category keeps an exact tie.
    let (top, _) = scores
        .iter()
        .copied()
        .fold(scores[0], |best, cur| if cur.1 > best.1 { cur } else { best });

    let total: f64 = scores.iter().map(|(_, s)| s).sum();
    let shares: Vec<AccentShare> = scores
        .iter()
        .map(|&(accent, s)| AccentShare {
            accent,
            percent: s / total * 100.0,
        })
        .collect();

    let confidence = shares
        .iter()
        .find(|share| share.accent == top)
        .map(|share| share.percent)
        .unwrap_or(0.0);

    let strong = shares
        .iter()
        .filter(|share| share.percent > config.mixed_threshold_pct)
        .count();
    let note = if strong > 1 {
        format!("Mixed accent with {} being dominant.", top)
    } else {
        top.note()
            .unwrap_or("No strong regional indicators found.")
            .to_string()
    };

    let mut breakdown = shares;
    breakdown.sort_by(|a, b| b.percent.total_cmp(&a.percent));

    let confidence_details = breakdown
        .iter()
        .map(|share| format!("{}: {:.1}%", share.accent, share.percent))
        .collect::<Vec<_>>()
        .join("\n");

    debug!(
        "[SCORER] {} ({:.1}%) from {} chars of text, matched {:?}",
        top,
        confidence,
        text.len(),
        matched
    );

    AnalysisResult {
        accent: top,
        confidence,
        note,
        breakdown,
        confidence_details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_of(result: &AnalysisResult, accent: Accent) -> f64 {
        result
            .breakdown
            .iter()
            .find(|s| s.accent == accent)
            .map(|s| s.percent)
            .unwrap()
    }

    #[test]
    fn test_empty_text_defaults_to_american() {
        let result = classify("");
        assert_eq!(result.accent, Accent::American);
        // 0.4 out of 0.7
        assert!((result.confidence - 0.4 / 0.7 * 100.0).abs() < 1e-9);
        assert_eq!(result.note, "American expressions or locations detected.");
    }

    #[test]
    fn test_strong_australian_signal() {
        let result = classify("g'day mate, arvo barbie");
        assert_eq!(result.accent, Accent::Australian);
        assert_eq!(result.note, "Australian expressions or locations detected.");
        assert_eq!(result.breakdown[0].accent, Accent::Australian);
        for share in &result.breakdown[1..] {
            assert!(result.confidence > share.percent);
        }
    }

    #[test]
    fn test_repeated_phrase_counts_once() {
        let once = classify("london");
        let many = classify("london london london london");
        assert_eq!(once, many);
    }

    #[test]
    fn test_lexicon_hits_per_category() {
        let hits = lexicon_hits("g'day mate, cheers");
        assert_eq!(hits[0], (Accent::Australian, vec!["mate", "g'day"]));
        assert_eq!(hits[1], (Accent::British, vec!["cheers"]));
        assert!(hits[2].1.is_empty());
        assert!(hits[3].1.is_empty());
    }

    #[test]
    fn test_case_is_normalized() {
        assert_eq!(classify("G'DAY MATE"), classify("g'day mate"));
    }

    #[test]
    fn test_exact_tie_prefers_declaration_order() {
        let result = classify("mate dude");
        assert_eq!(result.accent, Accent::Australian);
        assert_eq!(percent_of(&result, Accent::Australian), percent_of(&result, Accent::American));
        assert!(result.note.contains("Mixed accent"));
        // Stable sort keeps Australian ahead of American.
        assert_eq!(result.breakdown[0].accent, Accent::Australian);
        assert_eq!(result.breakdown[1].accent, Accent::American);
    }

    #[test]
    fn test_weak_signal_bias_applied_below_threshold() {
        // One British hit: 1.1 + 0.1 * 3 = 1.4, still weak.
        let weak = classify("london");
        assert_eq!(weak.accent, Accent::British);
        assert!((percent_of(&weak, Accent::American) - 0.4 / 1.7 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_weak_signal_bias_not_applied_above_threshold() {
        // Two hits: 2.1 + 0.3 = 2.4, no bias.
        let strong = classify("london innit");
        assert!((percent_of(&strong, Accent::American) - 0.1 / 2.4 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_details_lines() {
        let result = classify("g'day mate, arvo barbie");
        let lines: Vec<&str> = result.confidence_details.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Australian: "));
        assert!(lines[0].ends_with('%'));
    }

    #[test]
    fn test_custom_default_accent() {
        let config = ScoringConfig {
            default_accent: Accent::British,
            ..ScoringConfig::default()
        };
        assert_eq!(classify_with("", &config).accent, Accent::British);
    }

    #[test]
    fn test_unknown_result_shape() {
        let result = AnalysisResult::unknown("fetch error: boom");
        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0.0);
        assert!(result.note.contains("boom"));
        assert!(result.breakdown.is_empty());
    }
}
