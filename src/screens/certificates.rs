use crate::api::ApiClient;
use crate::certificate::{self, Certificate};
use crate::extensions::date_time_ext::format_short;
use crate::screens::{SIGN_IN_PROMPT, short_id};
use crate::session;
use std::fmt::{Display, Formatter};
use tracing::{instrument, warn};

#[derive(Debug)]
pub enum CertificatesScreen {
    SignedOut,
    Loaded { certificates: Vec<Certificate>, query: String },
    Failed { message: String },
}

#[instrument(skip(api))]
pub async fn load(api: &ApiClient, query: &str) -> CertificatesScreen {
    if session::profile(api).await.is_none() {
        return CertificatesScreen::SignedOut;
    }

    match api.list_certificates().await {
        Ok(certificates) => CertificatesScreen::Loaded {
            certificates,
            query: query.to_string(),
        },
        Err(e) => {
            warn!("⚠️ Could not load certificates: {}", e);
            CertificatesScreen::Failed {
                message: "Network error. Could not load your certificates.".to_string(),
            }
        }
    }
}

impl Display for CertificatesScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (certificates, query) = match self {
            CertificatesScreen::SignedOut => return f.write_str(SIGN_IN_PROMPT),
            CertificatesScreen::Failed { message } => return f.write_str(message),
            CertificatesScreen::Loaded { certificates, query } => (certificates, query),
        };

        let latest = certificate::latest(certificates)
            .and_then(Certificate::created_at)
            .map(|created_at| format_short(&created_at))
            .unwrap_or_else(|| "None".to_string());

        writeln!(f, "Certificate Management")?;
        writeln!(f)?;
        writeln!(f, "Total certificates: {}", certificates.len())?;
        writeln!(f, "Unique devices:     {}", certificate::unique_device_count(certificates))?;
        writeln!(f, "Latest:             {}", latest)?;
        writeln!(f)?;

        let matches = certificate::search(certificates, query);
        if matches.is_empty() {
            return if query.is_empty() {
                write!(f, "No certificates yet. Start a secure wipe with `wipedash wipe` to create one.")
            } else {
                write!(f, "No certificates match '{}'.", query)
            };
        }

        for certificate in matches {
            let fields = certificate.resolve();
            writeln!(f, "Certificate {}...  [Verified]", short_id(&fields.id, 12))?;
            writeln!(f, "  Device: {}", fields.device_id)?;
            writeln!(f, "  Issuer: {}", fields.issuer)?;
            if let Some(created_at) = &fields.created_at {
                writeln!(f, "  Issued: {}", format_short(created_at))?;
            }
        }
        Ok(())
    }
}
