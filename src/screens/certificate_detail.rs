use crate::api::ApiClient;
use crate::certificate::{CertificateDetails, NOT_AVAILABLE};
use crate::extensions::date_time_ext::format_long;
use crate::screens::SIGN_IN_PROMPT;
use crate::session;
use std::fmt::{Display, Formatter};
use tracing::{instrument, warn};

#[derive(Debug)]
pub enum CertificateDetailScreen {
    SignedOut,
    NotFound,
    Loaded(CertificateDetails),
}

/// Fetches the certificate again by id, nothing is reused from the list.
#[instrument(skip(api))]
pub async fn load(api: &ApiClient, id: &str) -> CertificateDetailScreen {
    if session::profile(api).await.is_none() {
        return CertificateDetailScreen::SignedOut;
    }

    match api.get_certificate(id).await {
        Ok(Some(certificate)) => CertificateDetailScreen::Loaded(CertificateDetails::from(&certificate)),
        Ok(None) => CertificateDetailScreen::NotFound,
        Err(e) => {
            warn!(certificate_id = id, "⚠️ Failed to load certificate details: {}", e);
            CertificateDetailScreen::NotFound
        }
    }
}

fn date_or_not_available(value: Option<&String>) -> String {
    value.map(|v| format_long(v)).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl Display for CertificateDetailScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let details = match self {
            CertificateDetailScreen::SignedOut => return f.write_str(SIGN_IN_PROMPT),
            CertificateDetailScreen::NotFound => {
                writeln!(f, "Certificate not found")?;
                writeln!(f, "The requested certificate could not be found or you don't have access to it.")?;
                return write!(f, "Back to certificates: `wipedash certificates`");
            }
            CertificateDetailScreen::Loaded(details) => details,
        };

        writeln!(f, "Certificate Details  [Verified]")?;
        writeln!(f)?;
        writeln!(f, "Certificate ID: {}", details.certificate_id)?;
        writeln!(f, "Issuer:         {}", details.issuer)?;
        writeln!(f, "User ID:        {}", details.user_id)?;
        writeln!(f, "Created:        {}", date_or_not_available(details.created_at.as_ref()))?;
        writeln!(f)?;
        writeln!(f, "Device Information")?;
        writeln!(f, "  Device ID: {}", details.device.id)?;
        writeln!(f, "  Model:     {}", details.device.model)?;
        writeln!(f, "  Firmware:  {}", details.device.firmware)?;
        writeln!(f, "  Capacity:  {} GB", details.device.capacity_gb)?;

        if let Some(wipe) = &details.wipe {
            writeln!(f)?;
            writeln!(f, "Wipe Operation Details")?;
            writeln!(f, "  Method:  {}", wipe.method)?;
            writeln!(f, "  Passes:  {}", wipe.passes)?;
            writeln!(f, "  Started: {}", date_or_not_available(wipe.start_time.as_ref()))?;
            writeln!(f, "  Ended:   {}", date_or_not_available(wipe.end_time.as_ref()))?;
        }

        writeln!(f)?;
        writeln!(f, "Compliance: NIST 800-88, DoD 5220.22-M")?;
        write!(
            f,
            "Download the PDF with `wipedash download {}` or verify one with `wipedash verify <file>`.",
            details.certificate_id
        )
    }
}
