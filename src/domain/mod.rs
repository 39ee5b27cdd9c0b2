// Domain layer: core models, the static roster, and ports (interfaces).
// No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
pub mod roster;
