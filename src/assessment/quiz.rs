// src/assessment/quiz.rs

use super::AssessmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quiz {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: &'static [&'static str],
}

impl Quiz {
    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }
}

const CATALOGUE: [Quiz; 4] = [
    Quiz {
        id: 0,
        title: "Stress Pulse",
        description: "Rapid psychometric audit based on PSS-10 scales.",
        questions: &[
            "How often do you feel unable to control important things in your life?",
            "How often have you felt confident about your ability to handle your problems?",
            "How often have you felt that things were going your way?",
            "How often have you found that you could not cope with all the things you had to do?",
            "How often have you felt difficulties were piling up so high that you could not overcome them?",
        ],
    },
    Quiz {
        id: 1,
        title: "Anxiety Matrix",
        description: "Neural pattern detection for high-anxiety states.",
        questions: &[
            "Feeling nervous, anxious, or on edge?",
            "Not being able to stop or control worrying?",
            "Worrying too much about different things?",
            "Trouble relaxing?",
            "Being so restless that it is hard to sit still?",
        ],
    },
    Quiz {
        id: 2,
        title: "Burnout Audit",
        description: "Check if your academic energy is reaching critical levels.",
        questions: &[],
    },
    Quiz {
        id: 3,
        title: "Mood Velocity",
        description: "Analyze your emotional fluctuations over 168 hours.",
        questions: &[],
    },
];

pub fn catalogue() -> &'static [Quiz] {
    &CATALOGUE
}

/// Look a quiz up by numeric id or by title (case-insensitive, `-`/`_` read as spaces)
pub fn find_quiz(key: &str) -> Result<&'static Quiz, AssessmentError> {
    let key = key.trim();
    let normalized = key.replace(['-', '_'], " ");

    CATALOGUE
        .iter()
        .find(|q| {
            key.parse::<u8>().is_ok_and(|id| id == q.id)
                || q.title.eq_ignore_ascii_case(&normalized)
        })
        .ok_or_else(|| AssessmentError::UnknownQuiz(key.to_string()))
}
