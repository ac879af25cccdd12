use std::collections::{BTreeSet, HashSet};
use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::tier::QuestionCount;

/// Answer options shown for every question.
pub const OPTION_COUNT: usize = 4;

const BUILTIN_QUESTIONS: &str = include_str!("../data/questions.json");

/// Topical grouping of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Science,
    History,
    Geography,
    Entertainment,
    Sports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: [String; OPTION_COUNT],
    /// Must equal one of `options`.
    pub answer: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

/// True when the question's answer is one of its options.
pub fn is_valid_question(question: &Question) -> bool {
    question.options.iter().any(|o| *o == question.answer)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBankError {
    Parse(String),
    DuplicateId(u32),
    AnswerNotInOptions(u32),
}

impl fmt::Display for QuestionBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "question bank is not valid JSON: {e}"),
            Self::DuplicateId(id) => write!(f, "question id {id} appears more than once"),
            Self::AnswerNotInOptions(id) => {
                write!(f, "question {id} has an answer that is not among its options")
            },
        }
    }
}

impl std::error::Error for QuestionBankError {}

/// Optional category/difficulty constraints on a question selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
}

impl QuestionFilter {
    pub fn matches(&self, question: &Question) -> bool {
        self.category.is_none_or(|c| c == question.category)
            && self.difficulty.is_none_or(|d| d == question.difficulty)
    }
}

/// Read-only, ordered collection of questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The bank bundled with the crate.
    pub fn builtin() -> Result<Self, QuestionBankError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    pub fn from_json(json: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> =
            serde_json::from_str(json).map_err(|e| QuestionBankError::Parse(e.to_string()))?;
        Self::from_questions(questions)
    }

    /// Build a bank, rejecting duplicate ids and unanswerable questions.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(QuestionBankError::DuplicateId(q.id));
            }
            if !is_valid_question(q) {
                return Err(QuestionBankError::AnswerNotInOptions(q.id));
            }
        }
        Ok(Self { questions })
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn by_category(&self, category: Category) -> Vec<&Question> {
        self.filter(QuestionFilter {
            category: Some(category),
            difficulty: None,
        })
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Question> {
        self.filter(QuestionFilter {
            category: None,
            difficulty: Some(difficulty),
        })
    }

    /// Questions matching `filter`, in bank order.
    pub fn filter(&self, filter: QuestionFilter) -> Vec<&Question> {
        self.questions.iter().filter(|q| filter.matches(q)).collect()
    }

    /// Distinct categories present in the bank.
    pub fn categories(&self) -> BTreeSet<Category> {
        self.questions.iter().map(|q| q.category).collect()
    }

    /// Draw a random game of up to `tier` distinct questions from the
    /// filtered pool. Returns fewer when the pool is smaller than the tier.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        tier: QuestionCount,
        filter: QuestionFilter,
        rng: &mut R,
    ) -> Vec<&Question> {
        let pool = self.filter(filter);
        let wanted = tier.value() as usize;
        if pool.len() < wanted {
            tracing::debug!(
                %tier,
                available = pool.len(),
                "Question pool smaller than requested game"
            );
        }
        pool.choose_multiple(rng, wanted).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn make_question(id: u32, answer: &str) -> Question {
        Question {
            id,
            question: format!("Question {id}?"),
            options: [
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            answer: answer.to_string(),
            category: Category::General,
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn builtin_bank_loads_and_is_valid() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.len(), 26);
        assert!(bank.all().iter().all(is_valid_question));
        assert_eq!(bank.categories().len(), 6);
    }

    #[test]
    fn builtin_ids_are_sequential() {
        let bank = QuestionBank::builtin().unwrap();
        for (i, q) in bank.all().iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
        }
    }

    #[test]
    fn validity_predicate() {
        assert!(is_valid_question(&make_question(1, "c")));
        assert!(!is_valid_question(&make_question(1, "e")));
    }

    #[test]
    fn rejects_answer_outside_options() {
        let result = QuestionBank::from_questions(vec![make_question(1, "a"), make_question(2, "z")]);
        assert_eq!(result.unwrap_err(), QuestionBankError::AnswerNotInOptions(2));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = QuestionBank::from_questions(vec![make_question(7, "a"), make_question(7, "b")]);
        assert_eq!(result.unwrap_err(), QuestionBankError::DuplicateId(7));
    }

    #[test]
    fn rejects_wrong_option_count() {
        let json = r#"[{"id":1,"question":"?","options":["a","b"],"answer":"a",
            "category":"general","difficulty":"easy"}]"#;
        assert!(matches!(
            QuestionBank::from_json(json),
            Err(QuestionBankError::Parse(_))
        ));
    }

    #[test]
    fn filters_by_category_and_difficulty() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.by_category(Category::Science).len(), 6);
        assert_eq!(bank.by_difficulty(Difficulty::Hard).len(), 5);

        let easy_history = bank.filter(QuestionFilter {
            category: Some(Category::History),
            difficulty: Some(Difficulty::Easy),
        });
        assert_eq!(easy_history.len(), 2);
        assert!(
            easy_history
                .iter()
                .all(|q| q.category == Category::History && q.difficulty == Difficulty::Easy)
        );
    }

    #[test]
    fn get_by_id() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.get(6).unwrap().answer, "Au");
        assert!(bank.get(999).is_none());
    }

    #[test]
    fn draw_returns_distinct_questions() {
        let bank = QuestionBank::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let game = bank.draw(QuestionCount::Ten, QuestionFilter::default(), &mut rng);
        assert_eq!(game.len(), 10);
        let ids: HashSet<u32> = game.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn draw_is_capped_by_pool_size() {
        let bank = QuestionBank::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let filter = QuestionFilter {
            category: Some(Category::Sports),
            difficulty: None,
        };
        let game = bank.draw(QuestionCount::Hundred, filter, &mut rng);
        assert_eq!(game.len(), 4);
        assert!(game.iter().all(|q| q.category == Category::Sports));
    }
}
