// src/assessment/wizard.rs
// Multi-step quiz: one question at a time, scored once the last one is answered

use super::{Answer, AssessmentError, Quiz, QuizOutcome, score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Index of the question awaiting an answer
    Question(usize),
    Finished,
}

#[derive(Debug, Clone)]
pub struct QuizWizard {
    quiz: &'static Quiz,
    step: WizardStep,
    answers: Vec<Answer>,
}

impl QuizWizard {
    /// Start (or restart) a quiz with no answers
    pub fn start(quiz: &'static Quiz) -> Result<Self, AssessmentError> {
        if !quiz.has_questions() {
            return Err(AssessmentError::NoQuestions(quiz.title));
        }
        Ok(Self {
            quiz,
            step: WizardStep::Question(0),
            answers: Vec::with_capacity(quiz.questions.len()),
        })
    }

    pub fn quiz(&self) -> &'static Quiz {
        self.quiz
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&'static str> {
        match self.step {
            WizardStep::Question(i) => self.quiz.questions.get(i).copied(),
            WizardStep::Finished => None,
        }
    }

    /// Record an answer for the current question and advance
    pub fn answer(&mut self, answer: Answer) -> Result<WizardStep, AssessmentError> {
        let WizardStep::Question(index) = self.step else {
            return Err(AssessmentError::AlreadyFinished);
        };

        self.answers.push(answer);
        self.step = if index + 1 < self.quiz.questions.len() {
            WizardStep::Question(index + 1)
        } else {
            WizardStep::Finished
        };
        Ok(self.step)
    }

    /// Outcome, available once every question is answered
    pub fn result(&self) -> Option<QuizOutcome> {
        match self.step {
            WizardStep::Finished => score(&self.answers).ok(),
            WizardStep::Question(_) => None,
        }
    }

    /// Clipboard-style summary of the finished result
    pub fn share_text(&self) -> Option<String> {
        self.result().map(|outcome| {
            format!(
                "🧠 MindSpace Campus Labs: My {} result is {}. Insight: {}",
                self.quiz.title,
                outcome.label.to_uppercase(),
                outcome.insight
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{Band, find_quiz};

    #[test]
    fn test_walks_every_question() {
        let quiz = find_quiz("Stress Pulse").unwrap();
        let mut wizard = QuizWizard::start(quiz).unwrap();

        for i in 0..quiz.questions.len() {
            assert_eq!(wizard.step(), WizardStep::Question(i));
            assert_eq!(wizard.current_question(), Some(quiz.questions[i]));
            assert!(wizard.result().is_none());
            wizard.answer(Answer::Always).unwrap();
        }

        assert_eq!(wizard.step(), WizardStep::Finished);
        assert_eq!(wizard.current_question(), None);
        let outcome = wizard.result().unwrap();
        assert_eq!(outcome.band, Band::Elevated);
        assert_eq!(outcome.percentage, 100.0);
    }

    #[test]
    fn test_answer_after_finish_rejected() {
        let mut wizard = QuizWizard::start(find_quiz("1").unwrap()).unwrap();
        for _ in 0..5 {
            wizard.answer(Answer::Never).unwrap();
        }
        assert_eq!(wizard.answer(Answer::Never), Err(AssessmentError::AlreadyFinished));
        assert_eq!(wizard.answers().len(), 5);
    }

    #[test]
    fn test_empty_quiz_cannot_start() {
        let err = QuizWizard::start(find_quiz("Mood Velocity").unwrap()).unwrap_err();
        assert_eq!(err, AssessmentError::NoQuestions("Mood Velocity"));
    }

    #[test]
    fn test_share_text() {
        let mut wizard = QuizWizard::start(find_quiz("0").unwrap()).unwrap();
        assert!(wizard.share_text().is_none());
        for _ in 0..5 {
            wizard.answer(Answer::Never).unwrap();
        }
        assert_eq!(
            wizard.share_text().unwrap(),
            "🧠 MindSpace Campus Labs: My Stress Pulse result is OPTIMAL. Insight: Neural balance confirmed. Stay on your current path."
        );
    }
}
