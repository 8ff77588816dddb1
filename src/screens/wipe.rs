use crate::api::ApiClient;
use crate::screens::SIGN_IN_PROMPT;
use crate::session;
use crate::wipe::{self, WipeForm, WipeFormError, WipeOutcome};
use std::fmt::{Display, Formatter};
use tracing::instrument;

#[derive(Debug)]
pub enum WipeScreen {
    SignedOut,
    Invalid(WipeFormError),
    Done(WipeOutcome),
}

#[instrument(skip_all)]
pub async fn submit(api: &ApiClient, form: &WipeForm) -> WipeScreen {
    if session::profile(api).await.is_none() {
        return WipeScreen::SignedOut;
    }

    match form.to_request() {
        Ok(request) => WipeScreen::Done(wipe::submit(api, &request).await),
        Err(e) => WipeScreen::Invalid(e),
    }
}

impl Display for WipeScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WipeScreen::SignedOut => f.write_str(SIGN_IN_PROMPT),
            WipeScreen::Invalid(e) => write!(f, "{}", e),
            WipeScreen::Done(WipeOutcome::Succeeded { certificate_id }) => {
                writeln!(f, "Wipe completed successfully")?;
                writeln!(f, "Your drive has been securely wiped and a certificate has been generated.")?;
                writeln!(f, "Certificate ID: {}", certificate_id)?;
                write!(f, "View your certificates with `wipedash certificates`.")
            }
            WipeScreen::Done(WipeOutcome::Failed { message }) => write!(f, "Wipe failed: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_shows_the_certificate_id() {
        let screen = WipeScreen::Done(WipeOutcome::Succeeded {
            certificate_id: "Generated".to_string(),
        });

        assert!(screen.to_string().contains("Certificate ID: Generated"));
    }

    #[test]
    fn validation_errors_name_the_missing_field() {
        let screen = WipeScreen::Invalid(WipeFormError::MissingField("Device path"));

        assert_eq!(screen.to_string(), "Device path is required");
    }
}
