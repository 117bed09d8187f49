pub mod model;
pub mod report;
pub mod sim;

pub use model::{
    BuildingState, Catalog, ComponentHealth, ComponentId, Disaster, DisasterKind, Material,
    SimulationPhase,
};
pub use sim::{Outcome, OutcomeTier, Session, SessionConfig, SessionError};
