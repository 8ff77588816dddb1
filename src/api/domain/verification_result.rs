use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerificationResult {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub message: String,
}
