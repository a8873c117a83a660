// src/conversation/mood.rs
//! Cosmetic mood tagging for chat theming.
//!
//! A short list of keyword rules checked top-down, first match wins. This is
//! a presentation heuristic only and makes no claim of clinical validity; it
//! never influences what is sent to the relay.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MoodTag {
    #[default]
    Calm,
    Stressed,
    Vulnerable,
    Void,
}

impl MoodTag {
    pub const ALL: [MoodTag; 4] = [
        MoodTag::Calm,
        MoodTag::Stressed,
        MoodTag::Vulnerable,
        MoodTag::Void,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTag::Calm => "CALM",
            MoodTag::Stressed => "STRESSED",
            MoodTag::Vulnerable => "VULNERABLE",
            MoodTag::Void => "VOID",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MoodTag::Calm => "🌊",
            MoodTag::Stressed => "⚡",
            MoodTag::Vulnerable => "💎",
            MoodTag::Void => "🌑",
        }
    }

    /// Background gradient for the chat surface
    pub fn gradient(&self) -> &'static str {
        match self {
            MoodTag::Calm => "linear-gradient(135deg, rgba(0, 242, 254, 0.05) 0%, rgba(102, 126, 234, 0.05) 100%)",
            MoodTag::Stressed => "linear-gradient(135deg, rgba(249, 212, 35, 0.05) 0%, rgba(255, 78, 80, 0.05) 100%)",
            MoodTag::Vulnerable => "linear-gradient(135deg, rgba(251, 137, 251, 0.05) 0%, rgba(255, 107, 107, 0.05) 100%)",
            MoodTag::Void => "linear-gradient(135deg, rgba(10, 11, 30, 0.2) 0%, rgba(0, 0, 0, 0.4) 100%)",
        }
    }
}

impl std::fmt::Display for MoodTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MoodTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Anything that can tag a message. Swap in a real sentiment model here.
pub trait MoodClassifier: Send + Sync {
    fn classify(&self, text: &str) -> MoodTag;
}

#[derive(Debug, Clone)]
pub struct MoodRule {
    pub pattern: Regex,
    pub tag: MoodTag,
}

impl MoodRule {
    pub fn new(pattern: Regex, tag: MoodTag) -> Self {
        Self { pattern, tag }
    }
}

static RE_VULNERABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sad|lonely|hurt|crying|vulnerable").expect("valid regex"));
static RE_STRESSED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)stress|exam|deadline|panic|anxious").expect("valid regex"));
static RE_VOID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)numb|nothing|empty|void").expect("valid regex"));

static DEFAULT_CLASSIFIER: Lazy<KeywordMoodClassifier> = Lazy::new(KeywordMoodClassifier::default);

/// Ordered substring rules; no match falls back to the default tag
#[derive(Debug, Clone)]
pub struct KeywordMoodClassifier {
    rules: Vec<MoodRule>,
    fallback: MoodTag,
}

impl KeywordMoodClassifier {
    pub fn new(rules: Vec<MoodRule>) -> Self {
        Self {
            rules,
            fallback: MoodTag::Calm,
        }
    }
}

impl Default for KeywordMoodClassifier {
    /// Vulnerable, then stressed, then void
    fn default() -> Self {
        Self::new(vec![
            MoodRule::new(RE_VULNERABLE.clone(), MoodTag::Vulnerable),
            MoodRule::new(RE_STRESSED.clone(), MoodTag::Stressed),
            MoodRule::new(RE_VOID.clone(), MoodTag::Void),
        ])
    }
}

impl MoodClassifier for KeywordMoodClassifier {
    fn classify(&self, text: &str) -> MoodTag {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.tag)
            .unwrap_or(self.fallback)
    }
}

/// Classify with the built-in keyword rules
pub fn classify_mood(text: &str) -> MoodTag {
    DEFAULT_CLASSIFIER.classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_phrases() {
        assert_eq!(classify_mood("I feel so lonely and hurt"), MoodTag::Vulnerable);
        assert_eq!(classify_mood("exam deadline panic"), MoodTag::Stressed);
        assert_eq!(classify_mood("nothing but empty void"), MoodTag::Void);
        assert_eq!(classify_mood("nice day today"), MoodTag::Calm);
    }

    #[test]
    fn test_vulnerable_takes_precedence() {
        assert_eq!(
            classify_mood("exam stress makes me want to cry... so sad"),
            MoodTag::Vulnerable
        );
        assert_eq!(classify_mood("anxious and numb"), MoodTag::Stressed);
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(classify_mood("EXAMS tomorrow"), MoodTag::Stressed);
        assert_eq!(classify_mood("Stressful week"), MoodTag::Stressed);
        assert_eq!(classify_mood("feeling Numbed out"), MoodTag::Void);
    }

    #[test]
    fn test_custom_rules_replace_defaults() {
        let classifier = KeywordMoodClassifier::new(vec![MoodRule::new(
            Regex::new("(?i)tired").unwrap(),
            MoodTag::Void,
        )]);
        assert_eq!(classifier.classify("so tired"), MoodTag::Void);
        assert_eq!(classifier.classify("lonely"), MoodTag::Calm);
    }

    #[test]
    fn test_gradients_are_fixed_per_tag() {
        assert_eq!(
            MoodTag::Calm.gradient(),
            "linear-gradient(135deg, rgba(0, 242, 254, 0.05) 0%, rgba(102, 126, 234, 0.05) 100%)"
        );
        assert_eq!(
            MoodTag::Void.gradient(),
            "linear-gradient(135deg, rgba(10, 11, 30, 0.2) 0%, rgba(0, 0, 0, 0.4) 100%)"
        );
        assert!(MoodTag::Stressed.gradient().contains("rgba(255, 78, 80, 0.05)"));
        assert!(MoodTag::Vulnerable.gradient().contains("rgba(251, 137, 251, 0.05)"));

        let distinct: std::collections::HashSet<&str> =
            MoodTag::ALL.iter().map(|tag| tag.gradient()).collect();
        assert_eq!(distinct.len(), MoodTag::ALL.len());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("vulnerable".parse::<MoodTag>(), Ok(MoodTag::Vulnerable));
        assert!("happy".parse::<MoodTag>().is_err());
        assert_eq!(MoodTag::Void.to_string(), "VOID");
        assert_eq!(serde_json::to_value(MoodTag::Stressed).unwrap(), "STRESSED");
    }
}
