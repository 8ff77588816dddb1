use crate::api::ApiClient;
use crate::session;
use crate::verification::{PdfFile, PdfVerifier, VerificationController, VerificationOutcome, VerificationState};
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::{debug, instrument, warn};

pub struct VerifyScreen {
    signed_in: bool,
    controller: VerificationController,
    read_error: Option<String>,
}

/// Verification is open to anyone, signing in only decides whether the anonymous notice is shown.
#[instrument(skip(api))]
pub async fn verify(api: &ApiClient, path: &Path) -> VerifyScreen {
    let signed_in = session::profile(api).await.is_some();

    match PdfFile::read(path).await {
        Ok(file) => run(api, signed_in, file).await,
        Err(e) => {
            warn!("⚠️ Could not read '{}': {}", path.display(), e);
            VerifyScreen {
                signed_in,
                controller: VerificationController::new(),
                read_error: Some(format!("Could not read '{}': {}", path.display(), e)),
            }
        }
    }
}

async fn run(verifier: &dyn PdfVerifier, signed_in: bool, file: PdfFile) -> VerifyScreen {
    let mut controller = VerificationController::new();

    // Rejections stay on the controller and are rendered from there
    match controller.select_file(file) {
        Ok(()) => {
            if let Err(e) = controller.verify(verifier).await {
                debug!("Verification not started: {}", e);
            }
        }
        Err(e) => debug!("File not accepted: {}", e),
    }

    VerifyScreen {
        signed_in,
        controller,
        read_error: None,
    }
}

impl Display for VerifyScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.signed_in {
            writeln!(f, "Notice: You're not logged in, results won't be saved to your account.")?;
        }
        writeln!(f, "Certificate Verification")?;

        if let Some(error) = &self.read_error {
            return write!(f, "{}", error);
        }
        if let Some(error) = self.controller.error() {
            return write!(f, "{}", error);
        }

        match self.controller.state() {
            VerificationState::Idle => write!(f, "Select a PDF certificate to verify."),
            VerificationState::FileSelected { file } => write!(f, "Ready to verify {}", file),
            VerificationState::Verifying { file } => write!(f, "Verifying {}...", file),
            VerificationState::Verified { file, outcome } => {
                writeln!(f, "File: {}", file)?;
                match outcome {
                    VerificationOutcome::Completed(result) if result.valid => write!(f, "✅ Valid: {}", result.message),
                    VerificationOutcome::Completed(result) => write!(f, "❌ Invalid: {}", result.message),
                    VerificationOutcome::Failed(message) => write!(f, "{}", message),
                }
            }
        }
    }
}
