mod bonus;
mod costs;
mod outcome;
mod repair;
mod session;
mod waves;

pub use bonus::{
    MAX_STRUCTURAL_BONUS, MAX_STRUCTURAL_RESISTANCE, MIN_STRUCTURAL_RESISTANCE, structural_bonus,
};
pub use costs::{swap_delta, total_build_cost};
pub use outcome::{Outcome, OutcomeTier, classify};
pub use repair::{repair_cost, repair_level};
pub use session::{PhaseEvent, Session, SessionConfig, SessionError, WaveReport};
pub use waves::{resolve_wave, wave_intensity};
