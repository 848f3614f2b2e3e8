use serde::{Deserialize, Serialize};

use super::config::ProfileBands;

/// Qualitative label for the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    CriticalExhaustion,
    DeepFatigue,
    FragileBalance,
    StableEnergy,
    OptimalVitality,
}

impl Profile {
    pub fn from_percentage(percentage: u8, bands: &ProfileBands) -> Self {
        if percentage < bands.deep_fatigue_from {
            Profile::CriticalExhaustion
        } else if percentage < bands.fragile_balance_from {
            Profile::DeepFatigue
        } else if percentage < bands.stable_energy_from {
            Profile::FragileBalance
        } else if percentage < bands.optimal_vitality_from {
            Profile::StableEnergy
        } else {
            Profile::OptimalVitality
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Profile::CriticalExhaustion => "Épuisement Critique - Besoin Urgent de Soutien",
            Profile::DeepFatigue => "Fatigue Profonde - En Transition",
            Profile::FragileBalance => "Équilibre Fragile - En Reconstruction",
            Profile::StableEnergy => "Énergie Stable - En Progression",
            Profile::OptimalVitality => "Vitalité Optimale - Excellence Durable",
        }
    }
}
