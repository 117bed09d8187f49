use crate::model::{BuildingState, Catalog, ComponentHealth, ComponentId, FULL_HEALTH};

/// Price of restoring a level to full, given its current health and the
/// cost of the material installed there: `(100 - health) * cost / 200`.
/// A level already at full health costs nothing.
pub fn repair_cost(current_health: f64, material_cost: f64) -> f64 {
    (FULL_HEALTH - current_health) * (material_cost / 200.0)
}

/// Restore one component level to full health, returning the price charged.
///
/// # Panics
/// Panics if `level` is out of range for the component.
pub fn repair_level(
    health: &mut ComponentHealth,
    building: &BuildingState,
    catalog: &Catalog,
    component: ComponentId,
    level: usize,
) -> f64 {
    let material = building.selected(component, level);
    let cost = repair_cost(
        health.level(component, level),
        catalog.material(component, material).cost,
    );
    health.restore(component, level);
    cost
}
