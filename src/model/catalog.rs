use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::component::ComponentId;
use super::disaster::{Disaster, DisasterKind};
use super::material::Material;

// --- Stock material tables: (name, cost, resistance) ---
//
// Index 0 is the default selection for a fresh building. Defense systems
// default to "None" so protection is an explicit purchase.

const PILLAR_MATERIALS: &[(&str, f64, f64)] = &[
    ("Timber", 120.0, 8.0),
    ("Steel Frame", 320.0, 28.0),
    ("Reinforced Concrete", 540.0, 52.0),
];

const BEAM_MATERIALS: &[(&str, f64, f64)] = &[
    ("Pine Truss", 90.0, 6.0),
    ("Steel I-Beam", 280.0, 26.0),
    ("Carbon Composite", 520.0, 50.0),
];

const WALL_MATERIALS: &[(&str, f64, f64)] = &[
    ("Drywall", 60.0, 5.0),
    ("Brick", 160.0, 16.0),
    ("Poured Concrete", 340.0, 32.0),
];

const GLASS_MATERIALS: &[(&str, f64, f64)] = &[
    ("Float Glass", 50.0, 5.0),
    ("Tempered Glass", 150.0, 14.0),
    ("Laminated Impact Glass", 310.0, 26.0),
];

const FLOOR_MATERIALS: &[(&str, f64, f64)] = &[
    ("Plank Flooring", 80.0, 7.0),
    ("Concrete Slab", 230.0, 24.0),
    ("Steel Composite Deck", 500.0, 48.0),
];

const ROOF_MATERIALS: &[(&str, f64, f64)] = &[
    ("Asphalt Shingle", 110.0, 9.0),
    ("Standing-Seam Metal", 260.0, 24.0),
    ("Reinforced Membrane", 480.0, 42.0),
];

const LIGHTNING_ROD_MATERIALS: &[(&str, f64, f64)] = &[
    ("None", 0.0, 0.0),
    ("Copper Rod", 180.0, 45.0),
    ("Franklin Array", 420.0, 95.0),
];

const WIND_DAMPER_MATERIALS: &[(&str, f64, f64)] = &[
    ("None", 0.0, 0.0),
    ("Facade Dampers", 200.0, 20.0),
    ("Tuned Mass Damper", 520.0, 44.0),
];

const TSUNAMI_BARRIER_MATERIALS: &[(&str, f64, f64)] = &[
    ("None", 0.0, 0.0),
    ("Flood Panels", 240.0, 22.0),
    ("Harbor Seawall", 560.0, 48.0),
];

const SEISMIC_DAMPER_MATERIALS: &[(&str, f64, f64)] = &[
    ("None", 0.0, 0.0),
    ("Base Isolators", 300.0, 26.0),
    ("Friction Pendulum", 640.0, 54.0),
];

const DISASTERS: &[(DisasterKind, &str, f64)] = &[
    (DisasterKind::Earthquake, "Earthquake", 100.0),
    (DisasterKind::Hurricane, "Hurricane", 100.0),
    (DisasterKind::Tsunami, "Tsunami", 110.0),
    (DisasterKind::LightningStorm, "Lightning Storm", 120.0),
];

/// Static, read-only lookup table: materials per component and the disaster
/// roster. A material id is its index within the owning component's list.
///
/// Unknown ids are contract violations and panic; the catalog has no
/// recoverable error states once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    components: BTreeMap<ComponentId, Vec<Material>>,
    disasters: BTreeMap<DisasterKind, Disaster>,
}

impl Catalog {
    /// The stock catalog every session starts from.
    pub fn standard() -> Self {
        let tables: [(ComponentId, &[(&str, f64, f64)]); 10] = [
            (ComponentId::Pillars, PILLAR_MATERIALS),
            (ComponentId::Beams, BEAM_MATERIALS),
            (ComponentId::Walls, WALL_MATERIALS),
            (ComponentId::Glass, GLASS_MATERIALS),
            (ComponentId::Floor, FLOOR_MATERIALS),
            (ComponentId::Roof, ROOF_MATERIALS),
            (ComponentId::LightningRod, LIGHTNING_ROD_MATERIALS),
            (ComponentId::WindDampers, WIND_DAMPER_MATERIALS),
            (ComponentId::TsunamiBarriers, TSUNAMI_BARRIER_MATERIALS),
            (ComponentId::SeismicDampers, SEISMIC_DAMPER_MATERIALS),
        ];

        let components = tables
            .into_iter()
            .map(|(component, specs)| {
                let materials = specs
                    .iter()
                    .map(|&(name, cost, resistance)| Material::new(name, cost, resistance))
                    .collect();
                (component, materials)
            })
            .collect();

        let disasters = DISASTERS
            .iter()
            .map(|&(kind, label, power)| (kind, Disaster::new(label, power)))
            .collect();

        Self {
            components,
            disasters,
        }
    }

    /// Build a catalog from explicit per-component material lists and a
    /// disaster roster. Every component must be present with at least one
    /// material, and every disaster kind must be present.
    ///
    /// # Panics
    /// Panics if a component or disaster kind is missing or a material
    /// list is empty.
    pub fn from_parts(
        components: BTreeMap<ComponentId, Vec<Material>>,
        disasters: BTreeMap<DisasterKind, Disaster>,
    ) -> Self {
        let catalog = Self {
            components,
            disasters,
        };
        catalog.validate();
        catalog
    }

    /// Parse a custom catalog from JSON (same shape `serde` writes).
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate();
        Ok(catalog)
    }

    fn validate(&self) {
        for component in ComponentId::ALL {
            let materials = self
                .components
                .get(&component)
                .unwrap_or_else(|| panic!("catalog missing component {:?}", component));
            assert!(
                !materials.is_empty(),
                "catalog component {:?} has no materials",
                component
            );
        }
        for kind in DisasterKind::ALL {
            assert!(
                self.disasters.contains_key(&kind),
                "catalog missing disaster {:?}",
                kind
            );
        }
    }

    pub fn materials(&self, component: ComponentId) -> &[Material] {
        self.components
            .get(&component)
            .unwrap_or_else(|| panic!("catalog missing component {:?}", component))
    }

    /// Look up one material by component and index.
    ///
    /// # Panics
    /// Panics if `material` is out of range for the component's list.
    pub fn material(&self, component: ComponentId, material: usize) -> &Material {
        let materials = self.materials(component);
        materials.get(material).unwrap_or_else(|| {
            panic!(
                "material {material} out of range for {:?} ({} available)",
                component,
                materials.len()
            )
        })
    }

    pub fn disaster(&self, kind: DisasterKind) -> &Disaster {
        self.disasters
            .get(&kind)
            .unwrap_or_else(|| panic!("catalog missing disaster {:?}", kind))
    }
}
