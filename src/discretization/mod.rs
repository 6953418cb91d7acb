pub mod grid;
pub mod profile;

pub use grid::{PositionGrid, linspace};
pub use profile::SpatialProfile;
