mod standard;

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::domain::{Battery, Question, QuestionId};

/// Point values an option may carry; higher is healthier.
pub const POINT_SCALE: [u8; 4] = [0, 2, 4, 6];

/// Immutable question set grouped into batteries.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    /// The 35-question catalog, five questions per battery.
    pub fn standard() -> Self {
        let questions = standard::standard_questions();
        let index = build_index(&questions);
        Self { questions, index }
    }

    /// Build a catalog from arbitrary questions, checking the structural invariants.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if index.insert(question.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions(question.id.clone()));
            }
            if let Some(option) = question
                .options
                .iter()
                .find(|option| !POINT_SCALE.contains(&option.points))
            {
                return Err(CatalogError::PointsOffScale {
                    question: question.id.clone(),
                    points: option.points,
                });
            }
        }

        Ok(Self { questions, index })
    }

    /// Batteries present in the catalog, in canonical order.
    pub fn all_batteries(&self) -> Vec<Battery> {
        Battery::ALL
            .into_iter()
            .filter(|battery| self.questions.iter().any(|q| q.battery == *battery))
            .collect()
    }

    /// Questions of `battery` in catalog-definition order.
    pub fn battery_questions(&self, battery: Battery) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.battery == battery)
            .collect()
    }

    /// Fresh permutation of the full catalog. Batteries are not kept contiguous.
    pub fn randomized_full_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Question> {
        let mut ordered = self.questions.clone();
        ordered.shuffle(rng);
        ordered
    }

    /// Batteries in canonical order, questions shuffled inside each battery block.
    pub fn randomized_battery_blocks<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Question> {
        let mut ordered = Vec::with_capacity(self.questions.len());
        for battery in self.all_batteries() {
            let mut block: Vec<Question> = self
                .battery_questions(battery)
                .into_iter()
                .cloned()
                .collect();
            block.shuffle(rng);
            ordered.extend(block);
        }
        ordered
    }

    /// Catalog order, batteries grouped as defined.
    pub fn canonical_order(&self) -> Vec<Question> {
        self.all_batteries()
            .into_iter()
            .flat_map(|battery| self.battery_questions(battery).into_iter().cloned())
            .collect()
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|position| &self.questions[*position])
    }

    pub fn battery_of(&self, id: &QuestionId) -> Option<Battery> {
        self.question(id).map(|question| question.battery)
    }

    /// Highest reachable score for a battery (30 in the standard catalog).
    pub fn battery_max_points(&self, battery: Battery) -> u32 {
        self.battery_questions(battery)
            .iter()
            .map(|question| question.max_points())
            .sum()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn build_index(questions: &[Question]) -> HashMap<QuestionId, usize> {
    questions
        .iter()
        .enumerate()
        .map(|(position, question)| (question.id.clone(), position))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one question")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateQuestion(QuestionId),
    #[error("question {0} has no answer options")]
    NoOptions(QuestionId),
    #[error("question {question} offers {points} points, outside the 0/2/4/6 scale")]
    PointsOffScale { question: QuestionId, points: u8 },
}
