//! Quiz Models
//!
//! Generated questions plus the scoring of a finished attempt.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::normalizer::{JsonShape, ResponseSchema};
use crate::services::prompts::Difficulty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    /// Usually four options; the count is not enforced
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_answer
    }
}

impl ResponseSchema for Vec<QuizQuestion> {
    const SHAPE: JsonShape = JsonShape::Array;

    fn validate(&self) -> Result<(), String> {
        for (index, q) in self.iter().enumerate() {
            if q.correct_answer >= q.options.len() {
                return Err(format!(
                    "question {}: correctAnswer {} is out of range for {} options",
                    index,
                    q.correct_answer,
                    q.options.len()
                ));
            }
        }
        Ok(())
    }
}

/// Outcome of one quiz attempt, in the shape the history store keeps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: usize,
    pub total_questions: usize,
    /// Rounded to the nearest whole percent
    pub percentage: u32,
    /// 1 for a correct answer, 0 otherwise, per question
    pub correct_answers: Vec<u8>,
    /// Seconds
    pub time_taken: u64,
    pub date: DateTime<Utc>,
    pub topic: String,
    pub difficulty: Difficulty,
}

impl QuizResult {
    /// Score `answers` (chosen option index per question) against `questions`.
    ///
    /// Unanswered questions count as wrong.
    pub fn score(
        questions: &[QuizQuestion],
        answers: &[usize],
        topic: impl Into<String>,
        difficulty: Difficulty,
        time_taken: Duration,
    ) -> Self {
        let correct_answers: Vec<u8> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| match answers.get(i) {
                Some(answer) if q.is_correct(*answer) => 1,
                _ => 0,
            })
            .collect();
        let score = correct_answers.iter().filter(|c| **c == 1).count();
        let total_questions = questions.len();
        let percentage = if total_questions == 0 {
            0
        } else {
            (score as f64 / total_questions as f64 * 100.0).round() as u32
        };

        Self {
            score,
            total_questions,
            percentage,
            correct_answers,
            time_taken: time_taken.as_secs(),
            date: Utc::now(),
            topic: topic.into(),
            difficulty,
        }
    }

    pub fn performance_message(&self) -> &'static str {
        match self.percentage {
            p if p >= 90 => "Outstanding!",
            p if p >= 80 => "Great job!",
            p if p >= 70 => "Good work!",
            p if p >= 60 => "Keep practicing!",
            _ => "Need more practice",
        }
    }
}
