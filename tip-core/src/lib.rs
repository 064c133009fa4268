pub mod calculations;
pub mod format;
pub mod models;

pub use calculations::{TipCalculator, TipConfig, TipConfigError};
pub use models::*;
