use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a session currently stands.
///
/// Linear walk: Idle → Wave(1) → Repair(1) → Wave(2) → Repair(2) →
/// Wave(3) → Repair(3) → Results. `advance` saturates at Results; the
/// session layer decides whether advancing a finished run is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationPhase {
    Idle,
    Wave(u8),
    Repair(u8),
    Results,
}

pub const WAVE_COUNT: u8 = 3;

impl SimulationPhase {
    /// The single transition function.
    pub fn advance(self) -> SimulationPhase {
        match self {
            SimulationPhase::Idle => SimulationPhase::Wave(1),
            SimulationPhase::Wave(n) => SimulationPhase::Repair(n),
            SimulationPhase::Repair(n) if n < WAVE_COUNT => SimulationPhase::Wave(n + 1),
            SimulationPhase::Repair(_) => SimulationPhase::Results,
            SimulationPhase::Results => SimulationPhase::Results,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == SimulationPhase::Results
    }
}

impl fmt::Display for SimulationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationPhase::Idle => write!(f, "idle"),
            SimulationPhase::Wave(n) => write!(f, "wave_{n}"),
            SimulationPhase::Repair(n) => write!(f, "repair_{n}"),
            SimulationPhase::Results => write!(f, "results"),
        }
    }
}
