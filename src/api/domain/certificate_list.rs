use crate::certificate::Certificate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CertificateListResponse {
    #[serde(default)]
    pub success: bool,
    pub certificates: Option<Vec<Certificate>>,
}

impl CertificateListResponse {
    /// An unsuccessful listing is shown as an empty history.
    pub fn into_certificates(self) -> Vec<Certificate> {
        match self.success {
            true => self.certificates.unwrap_or_default(),
            false => Vec::new(),
        }
    }
}
