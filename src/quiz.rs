//! Multiple-choice practice quiz.
//!
//! The question bank is fixed. A [`QuizSession`] walks it front to back,
//! one answer per question, and grades the result once every question has
//! been answered.
use serde::Serialize;

use crate::error::QuizError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// index into `options`
    pub correct: usize,
    pub explanation: &'static str,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        question: "What is the chemical symbol for water?",
        options: &["H2O", "CO2", "NaCl", "CH4"],
        correct: 0,
        explanation: "Water is composed of two hydrogen atoms and one oxygen atom, giving it the chemical formula H2O.",
    },
    Question {
        id: 2,
        question: "Which planet is known as the 'Red Planet'?",
        options: &["Venus", "Jupiter", "Mars", "Saturn"],
        correct: 2,
        explanation: "Mars is called the 'Red Planet' because of its reddish appearance, which comes from iron oxide (rust) on its surface.",
    },
    Question {
        id: 3,
        question: "What is the powerhouse of the cell?",
        options: &["Nucleus", "Mitochondria", "Ribosome", "Chloroplast"],
        correct: 1,
        explanation: "Mitochondria are known as the powerhouse of the cell because they produce ATP, the energy currency of cells.",
    },
    Question {
        id: 4,
        question: "How many sides does a hexagon have?",
        options: &["5", "6", "7", "8"],
        correct: 1,
        explanation: "A hexagon is a polygon with six sides and six angles. The prefix 'hex-' means six.",
    },
    Question {
        id: 5,
        question: "What gas do plants absorb from the atmosphere during photosynthesis?",
        options: &["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
        correct: 2,
        explanation: "During photosynthesis, plants absorb carbon dioxide from the atmosphere and use it, along with water and sunlight, to produce glucose and oxygen.",
    },
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Great,
    Good,
    KeepStudying,
}

impl Grade {
    fn from_score(score: usize, total: usize) -> Self {
        // compare score/total against the thresholds without rounding
        let hundredths = score * 100;
        if total > 0 && hundredths >= 90 * total {
            Grade::Excellent
        } else if total > 0 && hundredths >= 70 * total {
            Grade::Great
        } else if total > 0 && hundredths >= 50 * total {
            Grade::Good
        } else {
            Grade::KeepStudying
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent work! You're a genius!",
            Grade::Great => "Great job! Keep up the good work!",
            Grade::Good => "Good effort! Review and try again!",
            Grade::KeepStudying => "Keep studying and you'll improve!",
        }
    }
}

/// Feedback for a single submitted answer.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AnswerOutcome<'q> {
    pub correct: bool,
    pub correct_option: &'q str,
    pub explanation: &'q str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReviewItem<'q> {
    pub question: &'q str,
    pub your_answer: &'q str,
    pub correct_answer: &'q str,
    pub correct: bool,
}

#[derive(Debug)]
pub struct QuizSession<'q> {
    questions: &'q [Question],
    answers: Vec<usize>,
    score: usize,
}

impl Default for QuizSession<'static> {
    fn default() -> Self {
        Self::new(QUESTIONS)
    }
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [Question]) -> Self {
        Self {
            questions,
            answers: Vec::with_capacity(questions.len()),
            score: 0,
        }
    }

    /// The question awaiting an answer, `None` once the quiz is complete.
    pub fn current(&self) -> Option<&'q Question> {
        self.questions.get(self.answers.len())
    }

    /// Zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answer(&mut self, choice: usize) -> Result<AnswerOutcome<'q>, QuizError> {
        let question = self.current().ok_or(QuizError::Completed)?;
        if choice >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                choice,
                options: question.options.len(),
            });
        }

        let correct = choice == question.correct;
        if correct {
            self.score += 1;
        }
        self.answers.push(choice);
        log::debug!(
            "quiz question {} answered with option {choice}, correct: {correct}",
            question.id
        );

        Ok(AnswerOutcome {
            correct,
            correct_option: question.options[question.correct],
            explanation: question.explanation,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Score as a whole percentage, rounded half up.
    pub fn percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        ((self.score * 200 + self.questions.len()) / (self.questions.len() * 2)) as u32
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score, self.questions.len())
    }

    /// Answered questions with the chosen and the correct option.
    pub fn review(&self) -> Vec<ReviewItem<'q>> {
        self.questions
            .iter()
            .zip(&self.answers)
            .map(|(question, &choice)| ReviewItem {
                question: question.question,
                your_answer: question.options[choice],
                correct_answer: question.options[question.correct],
                correct: choice == question.correct,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(session: &mut QuizSession, choices: &[usize]) {
        for &choice in choices {
            session.answer(choice).unwrap();
        }
    }

    #[test]
    fn bank_is_well_formed() {
        for q in QUESTIONS {
            assert!(q.correct < q.options.len(), "question {}", q.id);
        }
    }

    #[test]
    fn perfect_run() {
        let mut session = QuizSession::default();
        answer_all(&mut session, &[0, 2, 1, 1, 2]);
        assert!(session.is_complete());
        assert!(session.current().is_none());
        assert_eq!(session.score(), 5);
        assert_eq!(session.percentage(), 100);
        assert_eq!(session.grade(), Grade::Excellent);
        assert!(session.review().iter().all(|r| r.correct));
    }

    #[test]
    fn answer_feedback() {
        let mut session = QuizSession::default();
        let outcome = session.answer(3).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_option, "H2O");
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current().map(|q| q.id), Some(2));
    }

    #[test]
    fn grades_by_threshold() {
        assert_eq!(Grade::from_score(9, 10), Grade::Excellent);
        assert_eq!(Grade::from_score(4, 5), Grade::Great);
        assert_eq!(Grade::from_score(3, 5), Grade::Good);
        assert_eq!(Grade::from_score(1, 2), Grade::Good);
        assert_eq!(Grade::from_score(2, 5), Grade::KeepStudying);
        assert_eq!(Grade::from_score(0, 0), Grade::KeepStudying);
        assert_eq!(
            Grade::from_score(2, 5).message(),
            "Keep studying and you'll improve!"
        );
    }

    #[test]
    fn percentage_rounds() {
        let questions = &QUESTIONS[..3];
        let mut session = QuizSession::new(questions);
        answer_all(&mut session, &[0, 2, 0]);
        assert_eq!(session.score(), 2);
        // 66.67 rounds up
        assert_eq!(session.percentage(), 67);
        assert_eq!(session.grade(), Grade::Good);
    }

    #[test]
    fn review_lists_wrong_answers() {
        let mut session = QuizSession::default();
        answer_all(&mut session, &[1, 2]);
        let review = session.review();
        assert_eq!(review.len(), 2);
        assert_eq!(review[0].your_answer, "CO2");
        assert_eq!(review[0].correct_answer, "H2O");
        assert!(!review[0].correct);
        assert!(review[1].correct);
    }

    #[test]
    fn rejects_out_of_range_and_late_answers() {
        let mut session = QuizSession::default();
        assert_eq!(
            session.answer(4),
            Err(QuizError::OptionOutOfRange {
                choice: 4,
                options: 4
            })
        );
        assert_eq!(session.current_index(), 0);

        answer_all(&mut session, &[0, 0, 0, 0, 0]);
        assert_eq!(session.answer(0), Err(QuizError::Completed));
    }

    #[test]
    fn reset_starts_over() {
        let mut session = QuizSession::default();
        answer_all(&mut session, &[0, 2, 1]);
        session.reset();
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(session.review().is_empty());
        assert!(!session.is_complete());
    }
}
