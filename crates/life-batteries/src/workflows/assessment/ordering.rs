use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::domain::{Question, QuestionId};

/// How the question sequence is arranged for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMode {
    /// Catalog order.
    Canonical,
    /// Batteries in canonical order, shuffled inside each battery.
    #[default]
    BatteryBlocks,
    /// Full-catalog permutation; batteries may interleave.
    Shuffled,
}

impl OrderingMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderingMode::Canonical => "canonical",
            OrderingMode::BatteryBlocks => "battery_blocks",
            OrderingMode::Shuffled => "shuffled",
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderingMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "canonical" | "ordered" => Ok(Self::Canonical),
            "battery_blocks" | "blocks" => Ok(Self::BatteryBlocks),
            "shuffled" | "random" => Ok(Self::Shuffled),
            other => Err(format!(
                "unknown question ordering '{other}' (expected canonical, battery_blocks or shuffled)"
            )),
        }
    }
}

/// Source of the question sequence handed to a session at start.
///
/// Randomness lives behind this trait so sessions stay deterministic under test.
pub trait QuestionOrdering: Send + Sync {
    fn arrange(&self, catalog: &QuestionCatalog) -> Vec<Question>;
}

/// Draws from the thread-local RNG on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOrdering {
    mode: OrderingMode,
}

impl RandomOrdering {
    pub fn new(mode: OrderingMode) -> Self {
        Self { mode }
    }
}

impl QuestionOrdering for RandomOrdering {
    fn arrange(&self, catalog: &QuestionCatalog) -> Vec<Question> {
        let mut rng = rand::thread_rng();
        arrange_with(catalog, self.mode, &mut rng)
    }
}

/// Reproducible ordering: every call replays the same seed.
#[derive(Debug, Clone, Copy)]
pub struct SeededOrdering {
    mode: OrderingMode,
    seed: u64,
}

impl SeededOrdering {
    pub fn new(mode: OrderingMode, seed: u64) -> Self {
        Self { mode, seed }
    }
}

impl QuestionOrdering for SeededOrdering {
    fn arrange(&self, catalog: &QuestionCatalog) -> Vec<Question> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        arrange_with(catalog, self.mode, &mut rng)
    }
}

/// Explicit id sequence. Ids missing from the catalog are skipped.
#[derive(Debug, Clone, Default)]
pub struct FixedOrdering {
    ids: Vec<QuestionId>,
}

impl FixedOrdering {
    pub fn new(ids: Vec<QuestionId>) -> Self {
        Self { ids }
    }

    pub fn canonical(catalog: &QuestionCatalog) -> Self {
        Self::new(
            catalog
                .canonical_order()
                .into_iter()
                .map(|question| question.id)
                .collect(),
        )
    }
}

impl QuestionOrdering for FixedOrdering {
    fn arrange(&self, catalog: &QuestionCatalog) -> Vec<Question> {
        self.ids
            .iter()
            .filter_map(|id| catalog.question(id).cloned())
            .collect()
    }
}

fn arrange_with<R: rand::Rng + ?Sized>(
    catalog: &QuestionCatalog,
    mode: OrderingMode,
    rng: &mut R,
) -> Vec<Question> {
    match mode {
        OrderingMode::Canonical => catalog.canonical_order(),
        OrderingMode::BatteryBlocks => catalog.randomized_battery_blocks(rng),
        OrderingMode::Shuffled => catalog.randomized_full_order(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::domain::Battery;

    #[test]
    fn ordering_mode_parses_aliases() {
        assert_eq!("random".parse::<OrderingMode>(), Ok(OrderingMode::Shuffled));
        assert_eq!(
            " Battery_Blocks ".parse::<OrderingMode>(),
            Ok(OrderingMode::BatteryBlocks)
        );
        assert!("alphabetical".parse::<OrderingMode>().is_err());
    }

    #[test]
    fn seeded_ordering_is_reproducible() {
        let catalog = QuestionCatalog::standard();
        let ordering = SeededOrdering::new(OrderingMode::Shuffled, 42);
        assert_eq!(ordering.arrange(&catalog), ordering.arrange(&catalog));
        assert_eq!(ordering.arrange(&catalog).len(), catalog.len());
    }

    #[test]
    fn battery_blocks_keep_batteries_contiguous() {
        let catalog = QuestionCatalog::standard();
        let ordered = SeededOrdering::new(OrderingMode::BatteryBlocks, 7).arrange(&catalog);

        let mut seen: Vec<Battery> = Vec::new();
        for question in &ordered {
            if seen.last() != Some(&question.battery) {
                assert!(
                    !seen.contains(&question.battery),
                    "battery {} reappeared after another block",
                    question.battery
                );
                seen.push(question.battery);
            }
        }
        assert_eq!(seen, Battery::ALL.to_vec());
    }

    #[test]
    fn fixed_ordering_skips_unknown_ids() {
        let catalog = QuestionCatalog::standard();
        let ordering = FixedOrdering::new(vec![
            QuestionId::from("ment-2"),
            QuestionId::from("nope-1"),
            QuestionId::from("phys-1"),
        ]);
        let ids: Vec<String> = ordering
            .arrange(&catalog)
            .into_iter()
            .map(|question| question.id.0)
            .collect();
        assert_eq!(ids, vec!["ment-2".to_string(), "phys-1".to_string()]);
    }
}
