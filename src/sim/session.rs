use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::bonus::structural_bonus;
use super::costs::swap_delta;
use super::outcome::{Outcome, classify};
use super::repair::{repair_cost, repair_level};
use super::waves::{resolve_wave, wave_intensity};
use crate::model::{
    BuildingState, Catalog, ComponentHealth, ComponentId, DisasterKind, SimulationPhase,
};

/// Configuration for one session.
pub struct SessionConfig {
    pub floors: usize,
    pub starting_funds: f64,
    pub disaster: DisasterKind,
}

impl SessionConfig {
    pub fn new(disaster: DisasterKind) -> Self {
        Self {
            floors: 5,
            starting_funds: 25_000.0,
            disaster,
        }
    }
}

/// Recoverable failures of player-facing session operations. Contract
/// violations (bad ids, out-of-range levels) panic instead.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("operation requires the {required} phase, but the session is in {actual}")]
    PhaseMismatch {
        required: &'static str,
        actual: SimulationPhase,
    },
    #[error("insufficient funds: need {needed:.0}, have {available:.0}")]
    InsufficientFunds { needed: f64, available: f64 },
    #[error("the simulation has already finished")]
    SimulationComplete,
}

/// One resolved wave, as recorded in the session history and the JSONL
/// report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveReport {
    pub wave: u8,
    pub disaster: DisasterKind,
    pub intensity: f64,
    pub power: f64,
    pub bonus: f64,
    pub mean_before: f64,
    pub mean_after: f64,
}

/// What an [`Session::advance`] call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseEvent {
    WaveResolved(WaveReport),
    RepairWindow(u8),
    Finished(Outcome),
}

/// Orchestrates one run: owns the building, its health, the funds ledger,
/// and the phase machine, and invokes the wave resolver on each wave
/// transition.
///
/// The core computations stay pure; the session passes snapshots in and
/// stores the returned state, so concurrent readers of a cloned session
/// never observe in-place mutation.
pub struct Session {
    catalog: Catalog,
    config: SessionConfig,
    building: BuildingState,
    health: ComponentHealth,
    phase: SimulationPhase,
    funds: f64,
    reports: Vec<WaveReport>,
    outcome: Option<Outcome>,
}

impl Session {
    /// Start a session: fresh default building, full health, idle phase.
    /// The default build's cost is debited from the starting funds.
    ///
    /// # Panics
    /// Panics if the starting funds cannot cover the default build.
    pub fn new(catalog: Catalog, config: SessionConfig) -> Self {
        let building = BuildingState::new(config.floors);
        let initial_cost = building.total_cost(&catalog);
        assert!(
            config.starting_funds >= initial_cost,
            "starting funds {} cannot cover the default build ({initial_cost})",
            config.starting_funds
        );
        let health = ComponentHealth::full(config.floors);
        let funds = config.starting_funds - initial_cost;
        info!(
            disaster = ?config.disaster,
            floors = config.floors,
            funds,
            "session started"
        );
        Self {
            catalog,
            config,
            building,
            health,
            phase: SimulationPhase::Idle,
            funds,
            reports: Vec::new(),
            outcome: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn building(&self) -> &BuildingState {
        &self.building
    }

    pub fn health(&self) -> &ComponentHealth {
        &self.health
    }

    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    pub fn funds(&self) -> f64 {
        self.funds
    }

    pub fn reports(&self) -> &[WaveReport] {
        &self.reports
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Current damage-reduction bonus, derived from the building on demand.
    pub fn structural_bonus(&self) -> f64 {
        structural_bonus(&self.building, &self.catalog)
    }

    /// Swap one level's material. Idle phase only; the cost delta is
    /// debited (or refunded, on a downgrade).
    pub fn set_material(
        &mut self,
        component: ComponentId,
        level: usize,
        material: usize,
    ) -> Result<(), SessionError> {
        if self.phase != SimulationPhase::Idle {
            return Err(SessionError::PhaseMismatch {
                required: "idle",
                actual: self.phase,
            });
        }
        let current = self.building.selected(component, level);
        let delta = swap_delta(&self.catalog, component, current, material);
        if delta > self.funds {
            return Err(SessionError::InsufficientFunds {
                needed: delta,
                available: self.funds,
            });
        }
        self.building
            .set_material(&self.catalog, component, level, material);
        self.funds -= delta;
        debug!(?component, level, material, delta, funds = self.funds, "material swapped");
        Ok(())
    }

    /// Repair one component level back to full health. Repair phases only;
    /// the price is debited.
    pub fn repair(&mut self, component: ComponentId, level: usize) -> Result<f64, SessionError> {
        if !matches!(self.phase, SimulationPhase::Repair(_)) {
            return Err(SessionError::PhaseMismatch {
                required: "repair",
                actual: self.phase,
            });
        }
        let material = self.building.selected(component, level);
        let price = repair_cost(
            self.health.level(component, level),
            self.catalog.material(component, material).cost,
        );
        if price > self.funds {
            return Err(SessionError::InsufficientFunds {
                needed: price,
                available: self.funds,
            });
        }
        let charged = repair_level(
            &mut self.health,
            &self.building,
            &self.catalog,
            component,
            level,
        );
        self.funds -= charged;
        debug!(?component, level, charged, funds = self.funds, "repaired");
        Ok(charged)
    }

    /// Advance the phase machine one step. Entering a wave phase resolves
    /// that wave; entering Results classifies the final state.
    pub fn advance(&mut self) -> Result<PhaseEvent, SessionError> {
        if self.phase.is_terminal() {
            return Err(SessionError::SimulationComplete);
        }
        self.phase = self.phase.advance();
        info!(phase = %self.phase, "phase advanced");
        match self.phase {
            SimulationPhase::Wave(wave) => Ok(PhaseEvent::WaveResolved(self.run_wave(wave))),
            SimulationPhase::Repair(window) => Ok(PhaseEvent::RepairWindow(window)),
            SimulationPhase::Results => {
                let outcome = classify(&self.health);
                self.outcome = Some(outcome);
                info!(integrity = outcome.integrity, tier = ?outcome.tier, "simulation finished");
                Ok(PhaseEvent::Finished(outcome))
            }
            SimulationPhase::Idle => unreachable!("advance never returns to idle"),
        }
    }

    fn run_wave(&mut self, wave: u8) -> WaveReport {
        let bonus = self.structural_bonus();
        let intensity = wave_intensity(wave);
        let disaster = self.config.disaster;
        let mean_before = self.health.mean();
        let next = resolve_wave(
            disaster,
            wave,
            &self.building,
            &self.health,
            bonus,
            &self.catalog,
        );
        let report = WaveReport {
            wave,
            disaster,
            intensity,
            power: self.catalog.disaster(disaster).power * intensity,
            bonus,
            mean_before,
            mean_after: next.mean(),
        };
        self.health = next;
        info!(
            wave,
            disaster = ?disaster,
            mean_before = report.mean_before,
            mean_after = report.mean_after,
            "wave resolved"
        );
        self.reports.push(report.clone());
        report
    }

    /// Throw everything away and start over from the configured defaults.
    pub fn reset(&mut self) {
        self.building = BuildingState::new(self.config.floors);
        self.health = ComponentHealth::full(self.config.floors);
        self.funds = self.config.starting_funds - self.building.total_cost(&self.catalog);
        self.phase = SimulationPhase::Idle;
        self.reports.clear();
        self.outcome = None;
        info!("session reset");
    }
}
