use crate::certificate::record::{Certificate, is_truthy, scalar_text};
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";

/// Everything the detail screen shows about one certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateDetails {
    pub certificate_id: String,
    pub issuer: String,
    pub user_id: String,
    pub created_at: Option<String>,
    pub device: DeviceDetails,
    pub wipe: Option<WipeDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceDetails {
    pub id: String,
    pub model: String,
    pub firmware: String,
    pub capacity_gb: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WipeDetails {
    pub method: String,
    pub passes: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl From<&Certificate> for CertificateDetails {
    fn from(certificate: &Certificate) -> Self {
        let certificate_id = Some(certificate.certificate_id())
            .filter(|id| !id.is_empty())
            .or_else(|| certificate.text(&["certificate_id"]))
            .unwrap_or_default();

        CertificateDetails {
            certificate_id,
            issuer: certificate.text(&["issuer"]).unwrap_or_else(|| certificate.issuer()),
            user_id: or_not_available(certificate.text(&["user_id"])),
            created_at: certificate.created_at(),
            device: DeviceDetails {
                id: certificate.text(&["device_id"]).unwrap_or_else(|| certificate.device_id()),
                model: or_not_available(truthy_text(certificate.lookup(&["device", "model"]))),
                firmware: or_not_available(truthy_text(certificate.lookup(&["device", "firmware"]))),
                capacity_gb: or_not_available(truthy_text(certificate.lookup(&["device", "capacity_gb"]))),
            },
            wipe: certificate.lookup(&["wipe"]).filter(|wipe| is_truthy(wipe)).map(|wipe| WipeDetails {
                method: or_not_available(truthy_text(wipe.get("method"))),
                passes: or_not_available(truthy_text(wipe.get("passes"))),
                start_time: truthy_text(wipe.get("start_time")),
                end_time: truthy_text(wipe.get("end_time")),
            }),
        }
    }
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Empty strings, zero and `false` count as absent.
fn truthy_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| is_truthy(v)).and_then(scalar_text)
}
