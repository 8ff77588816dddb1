mod check;
mod tier;

pub use check::{HealthCheck, HealthCheckError, HealthCheckState};
pub use tier::{HealthTier, TemperatureBand};
