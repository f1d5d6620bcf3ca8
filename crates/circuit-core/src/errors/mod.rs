mod circuit_error;
mod config_error;
mod data_load_error;
mod nlu_error;

pub use circuit_error::{CircuitError, CircuitResult};
pub use config_error::ConfigError;
pub use data_load_error::DataLoadError;
pub use nlu_error::NluError;
