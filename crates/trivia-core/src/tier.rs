use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Number of questions in a game. Each tier keeps its own leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionCount {
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl QuestionCount {
    /// Every allowed tier, in ascending order.
    pub const ALL: [QuestionCount; 4] = [
        QuestionCount::Ten,
        QuestionCount::Twenty,
        QuestionCount::Fifty,
        QuestionCount::Hundred,
    ];

    pub const fn value(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// Match a numeric value against the allowed set.
    pub fn from_number(n: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| f64::from(tier.value()) == n)
    }

    /// Coerce a loosely typed JSON value to a tier.
    ///
    /// Numbers match on numeric value (`20` and `20.0` are the same tier).
    /// Strings are trimmed and parsed as numbers first. Anything else,
    /// including `null` and booleans, is not a tier.
    pub fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().and_then(Self::from_number),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A value that does not name one of the allowed tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidQuestionCount(pub String);

impl fmt::Display for InvalidQuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not an allowed question count", self.0)
    }
}

impl std::error::Error for InvalidQuestionCount {}

impl TryFrom<u32> for QuestionCount {
    type Error = InvalidQuestionCount;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::from_number(f64::from(n)).ok_or_else(|| InvalidQuestionCount(n.to_string()))
    }
}

impl FromStr for QuestionCount {
    type Err = InvalidQuestionCount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidQuestionCount(s.to_string()));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| InvalidQuestionCount(s.to_string()))
    }
}

impl Serialize for QuestionCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value())
    }
}

impl<'de> Deserialize<'de> for QuestionCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u32::deserialize(deserializer)?;
        Self::try_from(n).map_err(D::Error::custom)
    }
}
