pub mod building;
pub mod catalog;
pub mod component;
pub mod disaster;
pub mod health;
pub mod material;
pub mod phase;

pub use building::BuildingState;
pub use catalog::Catalog;
pub use component::ComponentId;
pub use disaster::{Disaster, DisasterKind};
pub use health::{ComponentHealth, FULL_HEALTH};
pub use material::Material;
pub use phase::{SimulationPhase, WAVE_COUNT};
