use crate::api::{ApiError, VerificationResult};
use crate::verification::pdf_file::PdfFile;
use async_trait::async_trait;
use std::mem;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub const VERIFICATION_FAILED_MESSAGE: &str = "Verification failed. Please try again.";

/// Uploads a certificate PDF and reports what the verification service thinks of it.
#[async_trait]
pub trait PdfVerifier: Send + Sync {
    async fn verify_pdf(&self, file: &PdfFile) -> Result<VerificationResult, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum VerificationState {
    #[default]
    Idle,
    FileSelected {
        file: PdfFile,
    },
    Verifying {
        file: PdfFile,
    },
    Verified {
        file: PdfFile,
        outcome: VerificationOutcome,
    },
}

/// A completed verification carries the service's verdict, which may still be `valid: false`.
/// A failed one never reached a verdict.
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    Completed(VerificationResult),
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerificationError {
    #[error("Please select a PDF file")]
    NotAPdf { media_type: String },
    #[error("Select a certificate PDF before verifying")]
    NoFileSelected,
    #[error("A verification is already in progress")]
    InProgress,
}

/// Drives one verification session: pick a file, upload it, show the verdict.
#[derive(Debug, Default)]
pub struct VerificationController {
    state: VerificationState,
    error: Option<VerificationError>,
}

impl VerificationController {
    pub fn new() -> Self {
        VerificationController::default()
    }

    pub fn state(&self) -> &VerificationState {
        &self.state
    }

    /// The last rejected action, cleared by the next accepted file.
    pub fn error(&self) -> Option<&VerificationError> {
        self.error.as_ref()
    }

    pub fn select_file(&mut self, file: PdfFile) -> Result<(), VerificationError> {
        let rejection = if matches!(self.state, VerificationState::Verifying { .. }) {
            Some(VerificationError::InProgress)
        } else if !file.is_pdf() {
            Some(VerificationError::NotAPdf {
                media_type: file.media_type().to_string(),
            })
        } else {
            None
        };

        if let Some(error) = rejection {
            warn!(file = file.name(), "⚠️ Rejected file: {}", error);
            self.error = Some(error.clone());
            return Err(error);
        }

        debug!(file = file.name(), "📄 Selected file");
        self.state = VerificationState::FileSelected { file };
        self.error = None;
        Ok(())
    }

    #[cfg(test)]
    pub fn clear_file(&mut self) {
        self.state = VerificationState::Idle;
        self.error = None;
    }

    /// Moves to `Verifying` and hands out the file to upload.
    pub fn begin_verify(&mut self) -> Result<PdfFile, VerificationError> {
        match mem::take(&mut self.state) {
            VerificationState::FileSelected { file } => {
                self.state = VerificationState::Verifying { file: file.clone() };
                self.error = None;
                Ok(file)
            }
            state => {
                let error = match state {
                    VerificationState::Verifying { .. } => VerificationError::InProgress,
                    _ => VerificationError::NoFileSelected,
                };
                self.state = state;
                Err(error)
            }
        }
    }

    /// Records the upload's result. Results arriving outside of `Verifying` are stale and dropped.
    pub fn finish_verify(&mut self, result: Result<VerificationResult, ApiError>) {
        let file = match mem::take(&mut self.state) {
            VerificationState::Verifying { file } => file,
            state => {
                debug!("Dropping stale verification result");
                self.state = state;
                return;
            }
        };

        let outcome = match result {
            Ok(result) => {
                info!(file = file.name(), valid = result.valid, "📄 Verification completed: {}", result.message);
                VerificationOutcome::Completed(result)
            }
            Err(e) => {
                warn!(file = file.name(), "⚠️ Verification request failed: {}", e);
                VerificationOutcome::Failed(VERIFICATION_FAILED_MESSAGE.to_string())
            }
        };

        self.state = VerificationState::Verified { file, outcome };
    }

    #[instrument(skip_all)]
    pub async fn verify(&mut self, verifier: &dyn PdfVerifier) -> Result<&VerificationOutcome, VerificationError> {
        let file = self.begin_verify()?;
        info!(file = file.name(), "📄 Verifying '{}'...", file.name());

        let result = verifier.verify_pdf(&file).await;
        self.finish_verify(result);

        match &self.state {
            VerificationState::Verified { outcome, .. } => Ok(outcome),
            _ => Err(VerificationError::NoFileSelected),
        }
    }
}
