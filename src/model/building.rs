use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::component::ComponentId;

/// The player's current material configuration: one selected material index
/// per component level.
///
/// Sequence lengths are fixed at construction (floor count for per-floor
/// components, 1 for Roof and defenses) and never change afterwards. The
/// only mutation is swapping one level's material; waves and repairs never
/// touch this state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingState {
    floors: usize,
    selections: BTreeMap<ComponentId, Vec<usize>>,
}

impl BuildingState {
    /// A fresh building with `floors` floors, every level on the default
    /// material (index 0).
    ///
    /// # Panics
    /// Panics if `floors` is 0.
    pub fn new(floors: usize) -> Self {
        assert!(floors > 0, "building needs at least one floor");
        let selections = ComponentId::ALL
            .into_iter()
            .map(|component| (component, vec![0; component.level_count(floors)]))
            .collect();
        Self { floors, selections }
    }

    pub fn floors(&self) -> usize {
        self.floors
    }

    /// Selected material indices for one component, one per level.
    pub fn selection(&self, component: ComponentId) -> &[usize] {
        &self.selections[&component]
    }

    /// Selected material index at a single level.
    ///
    /// # Panics
    /// Panics if `level` is out of range for the component.
    pub fn selected(&self, component: ComponentId, level: usize) -> usize {
        let selection = self.selection(component);
        assert!(
            level < selection.len(),
            "level {level} out of range for {:?} ({} levels)",
            component,
            selection.len()
        );
        selection[level]
    }

    /// Swap the material at one level, returning the cost delta
    /// (new cost minus old cost; negative on a downgrade).
    ///
    /// # Panics
    /// Panics if `level` or `material` is out of range.
    pub fn set_material(
        &mut self,
        catalog: &Catalog,
        component: ComponentId,
        level: usize,
        material: usize,
    ) -> f64 {
        let old = self.selected(component, level);
        let old_cost = catalog.material(component, old).cost;
        let new_cost = catalog.material(component, material).cost;
        self.selections.get_mut(&component).unwrap()[level] = material;
        new_cost - old_cost
    }

    /// Sum of the selected materials' costs across all components and levels.
    pub fn total_cost(&self, catalog: &Catalog) -> f64 {
        self.selections
            .iter()
            .map(|(&component, selection)| {
                selection
                    .iter()
                    .map(|&material| catalog.material(component, material).cost)
                    .sum::<f64>()
            })
            .sum()
    }
}
