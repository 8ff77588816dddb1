use crate::api::{ApiClient, ApiError, DriveHealth};
use thiserror::Error;
use tracing::{instrument, warn};

const GENERIC_FAILURE: &str = "Failed to check drive health. Please try again.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HealthCheckState {
    #[default]
    Idle,
    Checking {
        drive_id: String,
    },
    Checked {
        drive_id: String,
        health: DriveHealth,
    },
    Failed {
        drive_id: String,
        message: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HealthCheckError {
    #[error("Enter a drive ID to check")]
    MissingDriveId,
    #[error("A health check is already running")]
    InProgress,
}

/// One drive health check at a time. A new check replaces the previous result.
#[derive(Debug, Default)]
pub struct HealthCheck {
    state: HealthCheckState,
}

impl HealthCheck {
    pub fn new() -> Self {
        HealthCheck::default()
    }

    pub fn state(&self) -> &HealthCheckState {
        &self.state
    }

    pub fn begin(&mut self, drive_id: &str) -> Result<(), HealthCheckError> {
        if matches!(self.state, HealthCheckState::Checking { .. }) {
            return Err(HealthCheckError::InProgress);
        }

        let drive_id = drive_id.trim();
        if drive_id.is_empty() {
            return Err(HealthCheckError::MissingDriveId);
        }

        self.state = HealthCheckState::Checking {
            drive_id: drive_id.to_string(),
        };
        Ok(())
    }

    pub fn finish(&mut self, result: Result<DriveHealth, ApiError>) {
        let HealthCheckState::Checking { drive_id } = std::mem::take(&mut self.state) else {
            return;
        };

        self.state = match result {
            Ok(health) => HealthCheckState::Checked { drive_id, health },
            Err(e) => {
                warn!(drive_id = drive_id, "⚠️ Health check failed: {}", e);
                let message = match e {
                    ApiError::Status { .. } => e.to_string(),
                    _ => GENERIC_FAILURE.to_string(),
                };
                HealthCheckState::Failed { drive_id, message }
            }
        };
    }

    #[instrument(skip(self, api))]
    pub async fn run(&mut self, api: &ApiClient, drive_id: &str) -> Result<&HealthCheckState, HealthCheckError> {
        self.begin(drive_id)?;

        let result = api.check_drive_health(drive_id.trim()).await;
        self.finish(result);

        Ok(&self.state)
    }
}
