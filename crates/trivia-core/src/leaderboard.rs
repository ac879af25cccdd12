use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::score::{ScoreEntry, Submission, ranking};
use crate::tier::QuestionCount;

/// Entries kept per tier after every insertion.
pub const MAX_ENTRIES: usize = 10;

/// One tier's ranked list, best entry first, never longer than [`MAX_ENTRIES`].
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, re-rank and keep the top [`MAX_ENTRIES`].
    ///
    /// Returns the entry's 0-based rank, or `None` if it did not make the cut.
    /// The list is always sorted, so placing the entry after every entry that
    /// ranks at or above it matches an append followed by a stable sort: an
    /// entry that ties an existing one on both score and time ranks after it.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        let rank = self
            .entries
            .partition_point(|existing| ranking(existing, &entry) != Ordering::Greater);
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_ENTRIES);
        (rank < MAX_ENTRIES).then_some(rank)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-tier entry counts.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardStats {
    pub total: usize,
    pub tiers: BTreeMap<QuestionCount, usize>,
}

/// Result of a leaderboard read: one tier's list, or every tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeaderboardView {
    Tier(Vec<ScoreEntry>),
    All(BTreeMap<QuestionCount, Vec<ScoreEntry>>),
}

/// The process-wide set of leaderboards, one per allowed tier.
#[derive(Debug, Clone)]
pub struct LeaderboardSet {
    tiers: BTreeMap<QuestionCount, Leaderboard>,
}

impl Default for LeaderboardSet {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardSet {
    /// Create the set with an empty list for every tier.
    pub fn new() -> Self {
        Self {
            tiers: QuestionCount::ALL
                .into_iter()
                .map(|tier| (tier, Leaderboard::new()))
                .collect(),
        }
    }

    /// Record a validated submission in its tier. Returns the rank it
    /// landed at, or `None` if it was pushed straight out of the top list.
    pub fn submit(&mut self, submission: Submission, now: DateTime<Utc>) -> Option<usize> {
        let tier = submission.question_count;
        let entry = submission.into_entry(now);
        let board = self.tiers.entry(tier).or_default();
        let rank = board.insert(entry);
        tracing::debug!(%tier, ?rank, size = board.len(), "Score recorded");
        rank
    }

    /// Current ranked entries of one tier.
    pub fn tier(&self, tier: QuestionCount) -> &[ScoreEntry] {
        self.tiers.get(&tier).map(Leaderboard::entries).unwrap_or(&[])
    }

    /// Every tier mapped to a copy of its ranked entries.
    pub fn snapshot(&self) -> BTreeMap<QuestionCount, Vec<ScoreEntry>> {
        self.tiers
            .iter()
            .map(|(&tier, board)| (tier, board.entries().to_vec()))
            .collect()
    }

    /// A single tier when one is named, otherwise the whole mapping.
    pub fn view(&self, tier: Option<QuestionCount>) -> LeaderboardView {
        match tier {
            Some(tier) => LeaderboardView::Tier(self.tier(tier).to_vec()),
            None => LeaderboardView::All(self.snapshot()),
        }
    }

    pub fn stats(&self) -> LeaderboardStats {
        let tiers: BTreeMap<QuestionCount, usize> = self
            .tiers
            .iter()
            .map(|(&tier, board)| (tier, board.len()))
            .collect();
        LeaderboardStats {
            total: tiers.values().sum(),
            tiers,
        }
    }
}
