use crate::api::{ApiClient, ApiError, WipeRequest, WipeResponse};
use crate::certificate::is_truthy;
use serde_json::Value;
use tracing::{info, instrument, warn};

const GENERATED_CERTIFICATE_ID: &str = "Generated";
const WIPE_FAILED: &str = "Wipe operation failed";
const NETWORK_ERROR: &str = "Network error occurred";

#[derive(Debug, Clone, PartialEq)]
pub enum WipeOutcome {
    Succeeded { certificate_id: String },
    Failed { message: String },
}

impl From<WipeResponse> for WipeOutcome {
    /// A completed status and a returned certificate each count as success on their own, even when
    /// the other one disagrees.
    fn from(response: WipeResponse) -> Self {
        let certificate = response.certificate_json.as_ref().filter(|certificate| is_truthy(certificate));

        if response.status.as_deref() == Some("completed") || certificate.is_some() {
            let certificate_id = certificate
                .and_then(|certificate| certificate.get("certificate_id"))
                .filter(|id| is_truthy(id))
                .map(|id| match id {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_else(|| GENERATED_CERTIFICATE_ID.to_string());

            WipeOutcome::Succeeded { certificate_id }
        } else {
            let message = response
                .error
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| WIPE_FAILED.to_string());

            WipeOutcome::Failed { message }
        }
    }
}

impl From<Result<WipeResponse, ApiError>> for WipeOutcome {
    fn from(result: Result<WipeResponse, ApiError>) -> Self {
        match result {
            Ok(response) => response.into(),
            Err(e) => {
                warn!("⚠️ Wipe request failed: {}", e);
                WipeOutcome::Failed {
                    message: NETWORK_ERROR.to_string(),
                }
            }
        }
    }
}

/// Fires the wipe and waits for its terminal result, there is no progress in between.
#[instrument(skip_all, fields(device_id = %request.device.id))]
pub async fn submit(api: &ApiClient, request: &WipeRequest) -> WipeOutcome {
    let outcome = WipeOutcome::from(api.start_wipe(request).await);

    match &outcome {
        WipeOutcome::Succeeded { certificate_id } => info!("✅ Wipe completed, certificate '{}'", certificate_id),
        WipeOutcome::Failed { message } => warn!("⚠️ Wipe failed: {}", message),
    }

    outcome
}
