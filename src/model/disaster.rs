use serde::{Deserialize, Serialize};

use super::component::ComponentId;

/// The four disaster kinds a session can run.
///
/// `LightningStorm` is structurally different from the other three: it is
/// localized (rod, roof, top floors) and all-or-nothing against the rod,
/// while the others apply a uniform positional damage model to the whole
/// building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisasterKind {
    Earthquake,
    Hurricane,
    Tsunami,
    LightningStorm,
}

impl DisasterKind {
    pub const ALL: [DisasterKind; 4] = [
        DisasterKind::Earthquake,
        DisasterKind::Hurricane,
        DisasterKind::Tsunami,
        DisasterKind::LightningStorm,
    ];

    /// The single-instance defense system that absorbs this disaster's
    /// power before any other damage is computed.
    pub fn defense(self) -> ComponentId {
        match self {
            DisasterKind::Earthquake => ComponentId::SeismicDampers,
            DisasterKind::Hurricane => ComponentId::WindDampers,
            DisasterKind::Tsunami => ComponentId::TsunamiBarriers,
            DisasterKind::LightningStorm => ComponentId::LightningRod,
        }
    }
}

/// Static description of one disaster: display label and raw power before
/// the per-wave intensity multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disaster {
    pub label: String,
    pub power: f64,
}

impl Disaster {
    pub fn new(label: &str, power: f64) -> Self {
        Self {
            label: label.to_string(),
            power,
        }
    }
}
