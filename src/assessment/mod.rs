// src/assessment/mod.rs
//! Self-assessment quizzes: a fixed catalogue, Likert answers, percentage
//! scoring and banding. Results are not persisted.

pub mod quiz;
pub mod scoring;
pub mod wizard;

use thiserror::Error;

pub use quiz::{Quiz, catalogue, find_quiz};
pub use scoring::{Answer, Band, QuizOutcome, band_for, percentage, score};
pub use wizard::{QuizWizard, WizardStep};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("unknown quiz: {0}")]
    UnknownQuiz(String),

    #[error("quiz '{0}' has no questions yet")]
    NoQuestions(&'static str),

    #[error("answer {0} is outside the 0-3 scale")]
    AnswerOutOfRange(u8),

    #[error("quiz is already finished")]
    AlreadyFinished,

    #[error("no answers to score")]
    NoAnswers,
}
