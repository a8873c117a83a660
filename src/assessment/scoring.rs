// src/assessment/scoring.rs
// percentage = 100 * sum / (3 * count), banded by an ordered range table

use serde::Serialize;

use super::AssessmentError;

/// Likert answer on the 0-3 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Answer {
    Never = 0,
    Rarely = 1,
    Often = 2,
    Always = 3,
}

impl Answer {
    pub const ALL: [Answer; 4] = [Answer::Never, Answer::Rarely, Answer::Often, Answer::Always];
    pub const MAX: u8 = 3;

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Answer::Never => "Never",
            Answer::Rarely => "Rarely",
            Answer::Often => "Often",
            Answer::Always => "Always",
        }
    }
}

impl TryFrom<u8> for Answer {
    type Error = AssessmentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Answer::ALL
            .into_iter()
            .find(|a| a.value() == value)
            .ok_or(AssessmentError::AnswerOutOfRange(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Band {
    Optimal,
    Balanced,
    Elevated,
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::Optimal => "Optimal",
            Band::Balanced => "Balanced",
            Band::Elevated => "Elevated",
        }
    }

    pub fn insight(&self) -> &'static str {
        match self {
            Band::Optimal => "Neural balance confirmed. Stay on your current path.",
            Band::Balanced => {
                "Minor interference detected. Recommended: Mindfulness or talking session."
            }
            Band::Elevated => {
                "High systemic load. Please engage SOS or connect with a professional."
            }
        }
    }
}

/// Inclusive upper bound of each band, ascending
const BANDS: [(f64, Band); 3] = [
    (33.0, Band::Optimal),
    (66.0, Band::Balanced),
    (100.0, Band::Elevated),
];

pub fn band_for(percentage: f64) -> Band {
    BANDS
        .iter()
        .find(|(upper, _)| percentage <= *upper)
        .map(|(_, band)| *band)
        .unwrap_or(Band::Elevated)
}

/// `None` when there are no answers
pub fn percentage(answers: &[Answer]) -> Option<f64> {
    if answers.is_empty() {
        return None;
    }
    let sum: u32 = answers.iter().map(|a| u32::from(a.value())).sum();
    let max = answers.len() as f64 * f64::from(Answer::MAX);
    Some(100.0 * f64::from(sum) / max)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizOutcome {
    pub band: Band,
    pub label: &'static str,
    pub insight: &'static str,
    pub percentage: f64,
}

pub fn score(answers: &[Answer]) -> Result<QuizOutcome, AssessmentError> {
    let percentage = percentage(answers).ok_or(AssessmentError::NoAnswers)?;
    let band = band_for(percentage);
    Ok(QuizOutcome {
        band,
        label: band.label(),
        insight: band.insight(),
        percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_always_is_elevated() {
        let outcome = score(&[Answer::Always; 5]).unwrap();
        assert_eq!(outcome.percentage, 100.0);
        assert_eq!(outcome.band, Band::Elevated);
    }

    #[test]
    fn test_all_never_is_optimal() {
        let outcome = score(&[Answer::Never; 5]).unwrap();
        assert_eq!(outcome.percentage, 0.0);
        assert_eq!(outcome.band, Band::Optimal);
        assert_eq!(outcome.label, "Optimal");
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(band_for(33.0), Band::Optimal);
        assert_eq!(band_for(33.4), Band::Balanced);
        assert_eq!(band_for(66.0), Band::Balanced);
        assert_eq!(band_for(66.7), Band::Elevated);
    }

    #[test]
    fn test_mixed_answers() {
        // 5 of 15 = 33.3% -> just over the first edge
        let answers = [Answer::Rarely; 5];
        let outcome = score(&answers).unwrap();
        assert!((outcome.percentage - 33.333).abs() < 0.01);
        assert_eq!(outcome.band, Band::Balanced);
    }

    #[test]
    fn test_empty_answers() {
        assert_eq!(percentage(&[]), None);
        assert_eq!(score(&[]), Err(AssessmentError::NoAnswers));
    }

    #[test]
    fn test_answer_conversion() {
        assert_eq!(Answer::try_from(2u8), Ok(Answer::Often));
        assert_eq!(Answer::try_from(4u8), Err(AssessmentError::AnswerOutOfRange(4)));
    }
}
