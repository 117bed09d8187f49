use crate::model::{BuildingState, Catalog, ComponentId};

/// Sum of the selected materials' costs across every component and level.
pub fn total_build_cost(building: &BuildingState, catalog: &Catalog) -> f64 {
    building.total_cost(catalog)
}

/// Cost delta of swapping one level's material (new minus old); negative on
/// a downgrade. Callers adjust their running total by this instead of
/// re-summing the whole building.
pub fn swap_delta(
    catalog: &Catalog,
    component: ComponentId,
    old_material: usize,
    new_material: usize,
) -> f64 {
    catalog.material(component, new_material).cost - catalog.material(component, old_material).cost
}
