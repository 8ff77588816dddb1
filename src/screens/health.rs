use crate::api::{ApiClient, DriveHealth};
use crate::health::{HealthCheck, HealthCheckError, HealthCheckState, HealthTier, TemperatureBand};
use crate::screens::SIGN_IN_PROMPT;
use crate::session;
use std::fmt::{Display, Formatter};
use tracing::instrument;

#[derive(Debug)]
pub enum HealthScreen {
    SignedOut,
    Invalid(HealthCheckError),
    Checked(HealthCheckState),
}

#[instrument(skip(api))]
pub async fn check(api: &ApiClient, drive_id: &str) -> HealthScreen {
    if session::profile(api).await.is_none() {
        return HealthScreen::SignedOut;
    }

    let mut check = HealthCheck::new();
    match check.run(api, drive_id).await {
        Ok(state) => HealthScreen::Checked(state.clone()),
        Err(e) => HealthScreen::Invalid(e),
    }
}

fn write_health(f: &mut Formatter<'_>, drive_id: &str, health: &DriveHealth) -> std::fmt::Result {
    writeln!(f, "Drive Health: {}", drive_id)?;
    writeln!(f)?;
    if let Some(score) = health.health_score {
        writeln!(f, "Health score:  {:.2} ({})", score, HealthTier::from_score(score))?;
    }
    if let Some(class) = &health.health_class {
        writeln!(f, "Health class:  {}", class)?;
    }
    writeln!(f, "Failure score: {}", health.prediction)?;
    writeln!(f, "Message:       {}", health.message)?;
    writeln!(f, "Temperature:   {}°C ({})", health.temperature, TemperatureBand::from_celsius(health.temperature))?;
    writeln!(f, "SMART status:  {}", health.smart_status)?;

    if !health.errors.is_empty() {
        writeln!(f)?;
        writeln!(f, "Detected issues")?;
        for error in &health.errors {
            writeln!(f, "  - {}", error)?;
        }
    }
    Ok(())
}

impl Display for HealthScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthScreen::SignedOut => f.write_str(SIGN_IN_PROMPT),
            HealthScreen::Invalid(e) => write!(f, "{}", e),
            HealthScreen::Checked(HealthCheckState::Checked { drive_id, health }) => write_health(f, drive_id, health),
            HealthScreen::Checked(HealthCheckState::Failed { message, .. }) => f.write_str(message),
            HealthScreen::Checked(HealthCheckState::Idle | HealthCheckState::Checking { .. }) => {
                write!(f, "Enter a drive ID to view drive status and metrics.")
            }
        }
    }
}
