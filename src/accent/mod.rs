// Accent Analyzer - Accent Categories & Lexicon
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// The four scored accent categories and the fixed trigger phrases for each.
// Phrases are lowercase and matched as plain substrings.

pub mod scorer;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use scorer::{classify, classify_with, AnalysisResult, ScoringConfig};

const AUSTRALIAN_PHRASES: &[&str] = &[
    "mate", "aussie", "bloody", "no worries", "g'day", "arvo", "barbie", "reckon", "crikey",
    "australian", "australia", "sydney", "melbourne", "brisbane", "perth",
];

const BRITISH_PHRASES: &[&str] = &[
    "innit", "cheers", "trousers", "bloody", "blimey", "quid", "rubbish", "proper", "mum",
    "whilst", "british", "britain", "uk", "london", "manchester", "liverpool", "england",
    "scotland", "wales",
];

const AMERICAN_PHRASES: &[&str] = &[
    "dude", "awesome", "gotta", "wanna", "guys", "totally", "mom", "bucks", "elevator",
    "apartment", "american", "america", "usa", "united states", "new york", "california",
    "los angeles", "chicago",
];

const INDIAN_ENGLISH_PHRASES: &[&str] = &[
    "only yaar", "i am telling", "what is your good name", "itself", "kindly",
    "do the needful", "prepone", "indian", "india", "mumbai", "delhi", "bangalore",
    "hyderabad", "chennai", "kolkata",
];

/// Accent label attached to an analysis.
///
/// `Unknown` marks a failed analysis and never takes part in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accent {
    #[serde(rename = "Australian")]
    Australian,
    #[serde(rename = "British")]
    British,
    #[serde(rename = "American")]
    American,
    #[serde(rename = "Indian English")]
    IndianEnglish,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Accent {
    /// Scored categories in declaration order. This order also breaks exact ties.
    pub const SCORED: [Accent; 4] = [
        Accent::Australian,
        Accent::British,
        Accent::American,
        Accent::IndianEnglish,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Accent::Australian => "Australian",
            Accent::British => "British",
            Accent::American => "American",
            Accent::IndianEnglish => "Indian English",
            Accent::Unknown => "Unknown",
        }
    }

    /// Trigger phrases for this category. Empty for `Unknown`.
    pub fn lexicon(&self) -> &'static [&'static str] {
        match self {
            Accent::Australian => AUSTRALIAN_PHRASES,
            Accent::British => BRITISH_PHRASES,
            Accent::American => AMERICAN_PHRASES,
            Accent::IndianEnglish => INDIAN_ENGLISH_PHRASES,
            Accent::Unknown => &[],
        }
    }

    /// Canned note shown when this category wins without a close rival.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            Accent::Australian => Some("Australian expressions or locations detected."),
            Accent::British => Some("British vocabulary and expressions identified."),
            Accent::American => Some("American expressions or locations detected."),
            Accent::IndianEnglish => Some("Indian English patterns or locations detected."),
            Accent::Unknown => None,
        }
    }

    /// Phrases from this category's lexicon that occur in `text`.
    /// `text` must already be lowercase.
    pub fn matches<'a>(&self, text: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.lexicon().iter().copied().filter(move |phrase| text.contains(phrase))
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
