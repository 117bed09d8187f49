use serde::{Deserialize, Serialize};

/// A configurable aspect of the building.
///
/// The six structural components carry one material selection per floor
/// (except `Roof`, which is a single instance). The four defense systems
/// are single-instance and absorb a matching disaster's power before any
/// structural damage is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentId {
    Pillars,
    Beams,
    Walls,
    Glass,
    Floor,
    Roof,
    LightningRod,
    WindDampers,
    TsunamiBarriers,
    SeismicDampers,
}

impl ComponentId {
    /// Every component, structural first, defenses last.
    pub const ALL: [ComponentId; 10] = [
        ComponentId::Pillars,
        ComponentId::Beams,
        ComponentId::Walls,
        ComponentId::Glass,
        ComponentId::Floor,
        ComponentId::Roof,
        ComponentId::LightningRod,
        ComponentId::WindDampers,
        ComponentId::TsunamiBarriers,
        ComponentId::SeismicDampers,
    ];

    /// The components that take damage during a wave.
    pub const STRUCTURAL: [ComponentId; 6] = [
        ComponentId::Pillars,
        ComponentId::Beams,
        ComponentId::Walls,
        ComponentId::Glass,
        ComponentId::Floor,
        ComponentId::Roof,
    ];

    pub fn is_defense(self) -> bool {
        matches!(
            self,
            ComponentId::LightningRod
                | ComponentId::WindDampers
                | ComponentId::TsunamiBarriers
                | ComponentId::SeismicDampers
        )
    }

    /// Number of material slots (and health slots) this component owns in a
    /// building with `floors` floors. Roof and defenses are single-instance.
    pub fn level_count(self, floors: usize) -> usize {
        match self {
            ComponentId::Pillars
            | ComponentId::Beams
            | ComponentId::Walls
            | ComponentId::Glass
            | ComponentId::Floor => floors,
            ComponentId::Roof
            | ComponentId::LightningRod
            | ComponentId::WindDampers
            | ComponentId::TsunamiBarriers
            | ComponentId::SeismicDampers => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComponentId::Pillars => "Pillars",
            ComponentId::Beams => "Beams",
            ComponentId::Walls => "Walls",
            ComponentId::Glass => "Glass",
            ComponentId::Floor => "Floor",
            ComponentId::Roof => "Roof",
            ComponentId::LightningRod => "Lightning Rod",
            ComponentId::WindDampers => "Wind Dampers",
            ComponentId::TsunamiBarriers => "Tsunami Barriers",
            ComponentId::SeismicDampers => "Seismic Dampers",
        }
    }
}
