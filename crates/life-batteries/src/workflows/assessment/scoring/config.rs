use serde::{Deserialize, Serialize};

/// Tier and band thresholds applied by the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Battery scores at or below this are critical.
    pub critical_max: u32,
    /// Battery scores at or below this (and above `critical_max`) are unstable.
    pub unstable_max: u32,
    pub profile_bands: ProfileBands,
}

/// Lower bounds (inclusive, in percent) of each profile band above the lowest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileBands {
    pub deep_fatigue_from: u8,
    pub fragile_balance_from: u8,
    pub stable_energy_from: u8,
    pub optimal_vitality_from: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            critical_max: 10,
            unstable_max: 20,
            profile_bands: ProfileBands::default(),
        }
    }
}

impl Default for ProfileBands {
    fn default() -> Self {
        Self {
            deep_fatigue_from: 35,
            fragile_balance_from: 55,
            stable_energy_from: 70,
            optimal_vitality_from: 85,
        }
    }
}
