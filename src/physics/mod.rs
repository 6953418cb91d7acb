pub mod constants;
pub mod error;
pub mod junction;
pub mod material;
pub mod units;

pub use error::{JunctionError, Result};
pub use junction::{BiasCondition, DepletionGeometry, JunctionSpec, MAX_BIAS_MAGNITUDE};
pub use material::MaterialParameters;
