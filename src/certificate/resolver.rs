use crate::certificate::record::Certificate;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const UNKNOWN: &str = "Unknown";

const CERTIFICATE_ID_PATHS: &[&[&str]] = &[&["certificateId"], &["payload", "payload", "certificate_id"]];
const DEVICE_ID_PATHS: &[&[&str]] = &[&["payload", "payload", "device", "id"], &["device"]];
const ISSUER_PATHS: &[&[&str]] = &[&["payload", "payload", "issuer", "org"]];
const CREATED_AT_PATHS: &[&[&str]] = &[&["createdAt"], &["created_at"]];

/// Display identity of a certificate, whatever layout the API used for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFields {
    pub id: String,
    pub device_id: String,
    pub issuer: String,
    pub created_at: Option<String>,
}

impl Certificate {
    pub fn resolve(&self) -> ResolvedFields {
        ResolvedFields {
            id: self.certificate_id(),
            device_id: self.device_id(),
            issuer: self.issuer(),
            created_at: self.created_at(),
        }
    }

    /// Direct `certificateId`, then the nested payload id, else empty.
    pub fn certificate_id(&self) -> String {
        self.first_of(CERTIFICATE_ID_PATHS).unwrap_or_default()
    }

    /// Nested payload device id, then the direct `device`, else `Unknown`.
    pub fn device_id(&self) -> String {
        self.first_of(DEVICE_ID_PATHS).unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn issuer(&self) -> String {
        self.first_of(ISSUER_PATHS).unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn created_at(&self) -> Option<String> {
        self.first_of(CREATED_AT_PATHS)
    }

    pub fn created_at_timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at().as_deref().and_then(parse_timestamp)
    }

    fn first_of(&self, paths: &[&[&str]]) -> Option<String> {
        paths.iter().find_map(|path| self.text(path))
    }
}

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Accepts RFC 3339, RFC 2822 (HTTP dates), an offset-less date-time (taken as UTC) or a plain date.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value).or_else(|_| DateTime::parse_from_rfc2822(value)) {
        return Some(date_time.with_timezone(&Utc));
    }

    if let Some(date_time) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(date_time.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date_time| date_time.and_utc())
}
