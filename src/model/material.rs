use serde::{Deserialize, Serialize};

/// A purchasable material for one component.
///
/// `resistance` is how much incoming disaster power the material absorbs at
/// its own level; higher resistance always means less damage. Materials are
/// addressed by their index within the owning component's catalog list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub cost: f64,
    pub resistance: f64,
}

impl Material {
    pub fn new(name: &str, cost: f64, resistance: f64) -> Self {
        Self {
            name: name.to_string(),
            cost,
            resistance,
        }
    }
}
