use tracing::debug;

use crate::model::{BuildingState, Catalog, ComponentHealth, ComponentId, DisasterKind};

/// Fixed escalation multipliers for the three waves.
const WAVE_INTENSITY: [f64; 3] = [0.6, 0.8, 1.0];

/// Lightning strike spread: damage divisor per component for the floors
/// inside the strike window.
const STRIKE_SPREAD: [(ComponentId, f64); 5] = [
    (ComponentId::Beams, 1.25),
    (ComponentId::Walls, 1.5),
    (ComponentId::Glass, 2.0),
    (ComponentId::Pillars, 1.2),
    (ComponentId::Floor, 1.8),
];

/// How many of the topmost floors a lightning strike reaches.
const STRIKE_WINDOW: usize = 3;

/// Intensity multiplier for a wave index.
///
/// # Panics
/// Panics on a wave index outside 1..=3 (contract violation).
pub fn wave_intensity(wave: u8) -> f64 {
    assert!(
        (1..=3).contains(&wave),
        "wave index out of range: {wave} (expected 1..=3)"
    );
    WAVE_INTENSITY[wave as usize - 1]
}

/// Resolve one disaster wave against the building.
///
/// Pure step function: reads the material configuration and current health,
/// returns a new health map. The input health is never mutated and no value
/// ever increases (waves only damage; repair is a separate operation).
pub fn resolve_wave(
    kind: DisasterKind,
    wave: u8,
    building: &BuildingState,
    health: &ComponentHealth,
    bonus: f64,
    catalog: &Catalog,
) -> ComponentHealth {
    let power = catalog.disaster(kind).power * wave_intensity(wave);
    let mut next = health.clone();
    match kind {
        DisasterKind::LightningStorm => {
            resolve_lightning(&mut next, building, catalog, power, bonus)
        }
        DisasterKind::Earthquake | DisasterKind::Hurricane | DisasterKind::Tsunami => {
            resolve_structural(&mut next, kind, building, catalog, power, bonus)
        }
    }
    debug!(
        disaster = ?kind,
        wave,
        power,
        bonus,
        mean = next.mean(),
        "wave resolved"
    );
    next
}

/// Localized model: only the rod defends, and only the rod, roof, and the
/// topmost floors can be hit. A rod that matches or exceeds the wave's power
/// absorbs the strike entirely.
fn resolve_lightning(
    health: &mut ComponentHealth,
    building: &BuildingState,
    catalog: &Catalog,
    power: f64,
    bonus: f64,
) {
    let rod_material = building.selected(ComponentId::LightningRod, 0);
    let rod_resistance = catalog
        .material(ComponentId::LightningRod, rod_material)
        .resistance;
    if rod_resistance >= power {
        return;
    }
    let effective = power - rod_resistance;

    // The rod overloads on the raw exceedance; the structural bonus does
    // not apply to the rod itself.
    health.apply_damage(ComponentId::LightningRod, 0, effective * 2.0);
    health.apply_damage(ComponentId::Roof, 0, effective * 1.2 * (1.0 - bonus));

    // Strike decays down the topmost floors, stopping early on short buildings.
    let floors = building.floors();
    for offset in 0..STRIKE_WINDOW {
        let Some(level) = floors.checked_sub(offset + 1) else {
            break;
        };
        let falloff = 1.0 / (offset as f64 * 1.5 + 1.0);
        let strike = effective * falloff * (1.0 - bonus);
        for (component, divisor) in STRIKE_SPREAD {
            health.apply_damage(component, level, strike / divisor);
        }
    }
}

/// Uniform model for earthquake/hurricane/tsunami: the matching defense
/// absorbs power once globally, then every structural level subtracts its
/// own material's resistance again before positional scaling and the bonus.
fn resolve_structural(
    health: &mut ComponentHealth,
    kind: DisasterKind,
    building: &BuildingState,
    catalog: &Catalog,
    power: f64,
    bonus: f64,
) {
    let defense = kind.defense();
    let defense_material = building.selected(defense, 0);
    let defense_resistance = catalog.material(defense, defense_material).resistance;
    let effective = (power - defense_resistance).max(0.0);
    if effective == 0.0 {
        return;
    }

    for component in ComponentId::STRUCTURAL {
        let selection = building.selection(component);
        let count = selection.len();
        for (level, &material) in selection.iter().enumerate() {
            let resistance = catalog.material(component, material).resistance;
            let mut damage = (effective - resistance).max(0.0);
            damage *= positional_modifier(kind, level, count);
            damage *= 1.0 - bonus;
            health.apply_damage(component, level, damage);
        }
    }
}

/// Floor-position scaling for the uniform model.
///
/// Tsunami front-loads the lowest floors (flood depth); earthquake is
/// front-loaded too but shallower (shockwave through the structure);
/// hurricane hits every floor alike.
fn positional_modifier(kind: DisasterKind, index: usize, count: usize) -> f64 {
    let position = index as f64 / count as f64;
    match kind {
        DisasterKind::Tsunami => (1.5 - position).max(0.0),
        DisasterKind::Earthquake => 1.2 - position / 2.0,
        DisasterKind::Hurricane => 1.0,
        DisasterKind::LightningStorm => unreachable!("lightning has no positional model"),
    }
}
