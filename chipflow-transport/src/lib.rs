mod base_plan;
pub use base_plan::*;
mod cost;
pub use cost::*;
mod cycle;
pub use cycle::*;
mod instance;
pub use instance::*;
mod plan;
pub use plan::*;
mod potentials;
pub use potentials::*;
