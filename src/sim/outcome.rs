use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ComponentHealth;

/// Narrative tier for the final report, by mean structural integrity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeTier {
    /// Mean above 75: the building shrugged it off.
    MinimalDamage,
    /// Mean above 50: battered but standing.
    SignificantDamage,
    /// Mean above 20: barely holding together.
    SevereDamage,
    /// Mean at or below 20.
    Collapse,
}

/// Final classification after wave 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub tier: OutcomeTier,
    /// Mean integrity rounded to the nearest whole percent, for display.
    pub integrity: u32,
}

/// Classify the end-of-run health state.
///
/// Thresholds are strict: a mean of exactly 75 is significant damage, not
/// minimal; exactly 50 is severe, not significant.
pub fn classify(health: &ComponentHealth) -> Outcome {
    let mean = health.mean();
    let tier = if mean > 75.0 {
        OutcomeTier::MinimalDamage
    } else if mean > 50.0 {
        OutcomeTier::SignificantDamage
    } else if mean > 20.0 {
        OutcomeTier::SevereDamage
    } else {
        OutcomeTier::Collapse
    };
    Outcome {
        tier,
        integrity: mean.round() as u32,
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tier {
            OutcomeTier::MinimalDamage => write!(
                f,
                "Your building weathered every wave with minimal damage ({}% integrity).",
                self.integrity
            ),
            OutcomeTier::SignificantDamage => write!(
                f,
                "Your building took significant damage but is still standing ({}% integrity).",
                self.integrity
            ),
            OutcomeTier::SevereDamage => write!(
                f,
                "Your building is severely compromised ({}% integrity).",
                self.integrity
            ),
            OutcomeTier::Collapse => write!(
                f,
                "Total collapse. Only {}% of the structure remains.",
                self.integrity
            ),
        }
    }
}
