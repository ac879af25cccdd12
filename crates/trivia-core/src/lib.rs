pub mod leaderboard;
pub mod questions;
pub mod score;
pub mod tier;

pub use leaderboard::{LeaderboardSet, LeaderboardView, MAX_ENTRIES};
pub use score::{ScoreEntry, Submission, SubmissionError};
pub use tier::QuestionCount;
