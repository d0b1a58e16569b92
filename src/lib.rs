pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod probe;
pub mod status;
pub mod thresholds;

pub use error::{ProbeError, Result};
pub use probe::run_probe;
pub use status::{RunResult, Status};
