use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tier::QuestionCount;

/// One ranked leaderboard record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub name: String,
    pub score: f64,
    /// Completion time. Lower is better.
    pub time: f64,
    /// Assigned by the server when the submission is accepted.
    pub date: DateTime<Utc>,
    pub question_count: QuestionCount,
}

/// Why a submission body was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    Name,
    Score,
    Time,
    QuestionCount,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name must be a string"),
            Self::Score => write!(f, "score must be a number"),
            Self::Time => write!(f, "time must be a number"),
            Self::QuestionCount => write!(f, "questionCount must be 10, 20, 50 or 100"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// A validated score submission, not yet timestamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: String,
    pub score: f64,
    pub time: f64,
    pub question_count: QuestionCount,
}

impl Submission {
    /// Parse a raw JSON body into a submission.
    ///
    /// `name` must be a JSON string and `score`/`time` JSON numbers.
    /// `questionCount` is coerced to a number before the tier check, so a
    /// numeric string is accepted there. Bodies that are not objects fail on
    /// the first field.
    pub fn parse(body: &Value) -> Result<Self, SubmissionError> {
        let name = body
            .get("name")
            .and_then(Value::as_str)
            .ok_or(SubmissionError::Name)?
            .to_string();
        let score = body
            .get("score")
            .and_then(number)
            .ok_or(SubmissionError::Score)?;
        let time = body
            .get("time")
            .and_then(number)
            .ok_or(SubmissionError::Time)?;
        let question_count = body
            .get("questionCount")
            .and_then(QuestionCount::coerce)
            .ok_or(SubmissionError::QuestionCount)?;

        Ok(Self {
            name,
            score,
            time,
            question_count,
        })
    }

    /// Stamp the submission with its acceptance time.
    pub fn into_entry(self, date: DateTime<Utc>) -> ScoreEntry {
        ScoreEntry {
            name: self.name,
            score: self.score,
            time: self.time,
            date,
            question_count: self.question_count,
        }
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Leaderboard order: higher score first, faster time breaks ties.
pub fn ranking(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal))
}
