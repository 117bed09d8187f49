use crate::model::{BuildingState, Catalog, ComponentId};

/// Average resistance at which the structural bonus starts accruing.
pub const MIN_STRUCTURAL_RESISTANCE: f64 = 10.0;
/// Average resistance at which the structural bonus is maxed out.
pub const MAX_STRUCTURAL_RESISTANCE: f64 = 50.0;
/// Ceiling on the damage-reduction fraction.
pub const MAX_STRUCTURAL_BONUS: f64 = 0.4;

/// The load-bearing components whose materials drive the bonus.
const LOAD_BEARING: [ComponentId; 3] = [
    ComponentId::Pillars,
    ComponentId::Beams,
    ComponentId::Floor,
];

/// Damage-reduction fraction in `[0, MAX_STRUCTURAL_BONUS]` derived from the
/// average resistance of the selected Pillars/Beams/Floor materials across
/// every level.
///
/// Linear between the two thresholds, clamped outside them. Applied
/// multiplicatively (`damage *= 1 - bonus`) everywhere in the wave resolver
/// except the lightning rod's own overload damage.
pub fn structural_bonus(building: &BuildingState, catalog: &Catalog) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for component in LOAD_BEARING {
        for &material in building.selection(component) {
            total += catalog.material(component, material).resistance;
            count += 1;
        }
    }
    if count == 0 {
        return 0.0;
    }

    let avg = total / count as f64;
    if avg <= MIN_STRUCTURAL_RESISTANCE {
        0.0
    } else if avg >= MAX_STRUCTURAL_RESISTANCE {
        MAX_STRUCTURAL_BONUS
    } else {
        (avg - MIN_STRUCTURAL_RESISTANCE) / (MAX_STRUCTURAL_RESISTANCE - MIN_STRUCTURAL_RESISTANCE)
            * MAX_STRUCTURAL_BONUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upgrade_load_bearing(building: &mut BuildingState, catalog: &Catalog, material: usize) {
        for component in LOAD_BEARING {
            for level in 0..building.selection(component).len() {
                building.set_material(catalog, component, level, material);
            }
        }
    }

    #[test]
    fn default_build_earns_no_bonus() {
        // Stock tier-0 load-bearing materials average below the MIN threshold
        let catalog = Catalog::standard();
        let building = BuildingState::new(5);
        assert_eq!(structural_bonus(&building, &catalog), 0.0);
    }

    #[test]
    fn top_tier_build_maxes_the_bonus() {
        // Stock tier-2 load-bearing materials average 50 = MAX threshold
        let catalog = Catalog::standard();
        let mut building = BuildingState::new(5);
        upgrade_load_bearing(&mut building, &catalog, 2);
        assert_eq!(structural_bonus(&building, &catalog), MAX_STRUCTURAL_BONUS);
    }

    #[test]
    fn mid_tier_interpolates_linearly() {
        // Tier-1: pillars 28, beams 26, floor 24 => avg 26
        let catalog = Catalog::standard();
        let mut building = BuildingState::new(5);
        upgrade_load_bearing(&mut building, &catalog, 1);
        let expected = (26.0 - MIN_STRUCTURAL_RESISTANCE)
            / (MAX_STRUCTURAL_RESISTANCE - MIN_STRUCTURAL_RESISTANCE)
            * MAX_STRUCTURAL_BONUS;
        assert!((structural_bonus(&building, &catalog) - expected).abs() < 1e-9);
    }

    #[test]
    fn bonus_non_decreasing_in_material_tier() {
        let catalog = Catalog::standard();
        let mut building = BuildingState::new(5);
        let mut last = structural_bonus(&building, &catalog);
        for tier in 1..3 {
            upgrade_load_bearing(&mut building, &catalog, tier);
            let bonus = structural_bonus(&building, &catalog);
            assert!(bonus >= last, "bonus dropped when upgrading to tier {tier}");
            last = bonus;
        }
    }

    #[test]
    fn single_upgrade_never_lowers_the_bonus() {
        let catalog = Catalog::standard();
        let mut building = BuildingState::new(4);
        let before = structural_bonus(&building, &catalog);
        building.set_material(&catalog, ComponentId::Beams, 2, 2);
        assert!(structural_bonus(&building, &catalog) >= before);
    }

    #[test]
    fn bonus_stays_in_range() {
        let catalog = Catalog::standard();
        for tier in 0..3 {
            let mut building = BuildingState::new(6);
            upgrade_load_bearing(&mut building, &catalog, tier);
            let bonus = structural_bonus(&building, &catalog);
            assert!((0.0..=MAX_STRUCTURAL_BONUS).contains(&bonus));
        }
    }
}
