use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::component::ComponentId;

pub const FULL_HEALTH: f64 = 100.0;

/// Per-component, per-level health values, each in `[0, 100]`.
///
/// Same shape as [`BuildingState`](super::building::BuildingState): floor
/// count entries for per-floor components, one entry for Roof and each
/// defense. Damage only lowers values (clamped at 0); only repair restores
/// them, to exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentHealth {
    levels: BTreeMap<ComponentId, Vec<f64>>,
}

impl ComponentHealth {
    /// Every component at full health for a building with `floors` floors.
    pub fn full(floors: usize) -> Self {
        assert!(floors > 0, "building needs at least one floor");
        let levels = ComponentId::ALL
            .into_iter()
            .map(|component| (component, vec![FULL_HEALTH; component.level_count(floors)]))
            .collect();
        Self { levels }
    }

    pub fn levels(&self, component: ComponentId) -> &[f64] {
        &self.levels[&component]
    }

    /// Health at a single level.
    ///
    /// # Panics
    /// Panics if `level` is out of range for the component.
    pub fn level(&self, component: ComponentId, level: usize) -> f64 {
        let levels = self.levels(component);
        assert!(
            level < levels.len(),
            "level {level} out of range for {:?} ({} levels)",
            component,
            levels.len()
        );
        levels[level]
    }

    /// Subtract `damage` from one level, clamping at 0. Negative damage is
    /// a contract violation (damage never heals).
    pub fn apply_damage(&mut self, component: ComponentId, level: usize, damage: f64) {
        assert!(damage >= 0.0, "damage cannot be negative: {damage}");
        let current = self.level(component, level);
        self.levels.get_mut(&component).unwrap()[level] = (current - damage).max(0.0);
    }

    /// Restore one level to exactly full health.
    pub fn restore(&mut self, component: ComponentId, level: usize) {
        // Bounds check via level()
        self.level(component, level);
        self.levels.get_mut(&component).unwrap()[level] = FULL_HEALTH;
    }

    /// Arithmetic mean across every component and level.
    pub fn mean(&self) -> f64 {
        let mut total = 0.0;
        let mut count = 0usize;
        for levels in self.levels.values() {
            total += levels.iter().sum::<f64>();
            count += levels.len();
        }
        total / count as f64
    }

    /// Iterate `(component, level, health)` over every slot.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, usize, f64)> + '_ {
        self.levels.iter().flat_map(|(&component, levels)| {
            levels
                .iter()
                .enumerate()
                .map(move |(level, &health)| (component, level, health))
        })
    }
}
