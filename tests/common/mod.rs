use std::collections::BTreeMap;

use towerstorm::model::{Catalog, ComponentId, Disaster, DisasterKind, Material};

fn materials(specs: &[(&str, f64, f64)]) -> Vec<Material> {
    specs
        .iter()
        .map(|&(name, cost, resistance)| Material::new(name, cost, resistance))
        .collect()
}

/// Small catalog with round numbers, sized for hand-checked damage math.
///
/// Load-bearing tier 0 averages resistance 8 (below the bonus threshold, so
/// a default build has bonus 0); tier 1 averages 40 (bonus 0.3). Every
/// defense has a "Bulwark" tier that exceeds any wave's power.
pub fn test_catalog_with(disaster_power: f64) -> Catalog {
    let tables: [(ComponentId, &[(&str, f64, f64)]); 10] = [
        (
            ComponentId::Pillars,
            &[("Post", 100.0, 8.0), ("Core Column", 400.0, 40.0)],
        ),
        (
            ComponentId::Beams,
            &[("Joist", 100.0, 8.0), ("Girder", 400.0, 40.0)],
        ),
        (
            ComponentId::Floor,
            &[("Deck", 100.0, 8.0), ("Slab", 400.0, 40.0)],
        ),
        (
            ComponentId::Walls,
            &[("Panel", 100.0, 10.0), ("Masonry", 300.0, 30.0)],
        ),
        (
            ComponentId::Glass,
            &[("Pane", 100.0, 10.0), ("Laminate", 300.0, 25.0)],
        ),
        (
            ComponentId::Roof,
            &[("Sheet", 100.0, 10.0), ("Plate", 300.0, 30.0)],
        ),
        (
            ComponentId::LightningRod,
            &[("None", 0.0, 0.0), ("Rod", 200.0, 50.0), ("Bulwark", 500.0, 500.0)],
        ),
        (
            ComponentId::WindDampers,
            &[("None", 0.0, 0.0), ("Dampers", 200.0, 20.0), ("Bulwark", 500.0, 500.0)],
        ),
        (
            ComponentId::TsunamiBarriers,
            &[("None", 0.0, 0.0), ("Barrier", 200.0, 20.0), ("Bulwark", 500.0, 500.0)],
        ),
        (
            ComponentId::SeismicDampers,
            &[("None", 0.0, 0.0), ("Isolator", 200.0, 20.0), ("Bulwark", 500.0, 500.0)],
        ),
    ];

    let components: BTreeMap<ComponentId, Vec<Material>> = tables
        .into_iter()
        .map(|(component, specs)| (component, materials(specs)))
        .collect();

    let disasters: BTreeMap<DisasterKind, Disaster> = DisasterKind::ALL
        .into_iter()
        .map(|kind| (kind, Disaster::new(&format!("{kind:?}"), disaster_power)))
        .collect();

    Catalog::from_parts(components, disasters)
}

/// The test catalog at the usual power 100.
pub fn test_catalog() -> Catalog {
    test_catalog_with(100.0)
}

#[allow(dead_code)]
pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
