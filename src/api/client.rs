use crate::api::domain::{CertificateListResponse, DriveHealth, DriveHealthRequest, VerificationResult, WipeRequest, WipeResponse};
use crate::app_config::AppConfig;
use crate::certificate::Certificate;
use crate::session::TokenStore;
use crate::verification::{PdfFile, PdfVerifier};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Talks to the sanitization service. Authenticated calls carry the stored bearer token, if any.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

pub fn new_client(config: &AppConfig, tokens: Arc<dyn TokenStore>) -> Result<ApiClient, ApiError> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(ApiClient {
        client,
        base_url: config.api().base_url().to_string(),
        tokens,
    })
}

impl ApiClient {
    pub fn http(&self) -> &Client {
        &self.client
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Certificate ids end up in URL paths and file names, so only plain segments are accepted.
    fn certificate_path(&self, id: &str, suffix: &str) -> Result<String, ApiError> {
        let is_plain = !id.is_empty()
            && id != "."
            && id != ".."
            && id.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        match is_plain {
            true => Ok(self.url(&format!("/api/certificates/{}{}", id, suffix))),
            false => Err(ApiError::InvalidCertificateId { id: id.to_string() }),
        }
    }

    async fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.tokens.load().await.map_err(ApiError::Token)?;
        Ok(match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }

    /// Starts a wipe and waits for its terminal result. The body is decoded whatever the status code,
    /// the service reports failures inside it.
    #[instrument(skip_all, fields(device_id = %request.device.id, method = %request.method))]
    pub async fn start_wipe(&self, request: &WipeRequest) -> Result<WipeResponse, ApiError> {
        info!("🧹 Requesting wipe of '{}'...", request.dev_path);

        let response = self.authorized(self.client.post(self.url("/api/wipe")).json(request)).await?.send().await?;
        let status = response.status();
        let wipe_response = response.json::<WipeResponse>().await?;

        info!(status_code = %status, "🧹 Requesting wipe of '{}'... done, status {:?}", request.dev_path, wipe_response.status);
        Ok(wipe_response)
    }

    #[instrument(skip(self))]
    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, ApiError> {
        info!("📜 Retrieving certificates...");

        let response = self.authorized(self.client.get(self.url("/api/list-certificates"))).await?.send().await?;
        let certificates = response.json::<CertificateListResponse>().await?.into_certificates();

        info!("📜 Retrieving certificates... OK, {} found", certificates.len());
        Ok(certificates)
    }

    /// `None` when the service answers with an empty body.
    #[instrument(skip(self))]
    pub async fn get_certificate(&self, id: &str) -> Result<Option<Certificate>, ApiError> {
        let response = self
            .authorized(self.client.get(self.certificate_path(id, "")?))
            .await?
            .send()
            .await?
            .error_for_status()?;

        let certificate = response.json::<Certificate>().await?;
        Ok(Some(certificate).filter(|certificate| !certificate.is_empty()))
    }

    /// Saves the certificate PDF as `{id}_certificate.pdf` in `directory`.
    #[instrument(skip(self))]
    pub async fn download_certificate_pdf(&self, id: &str, directory: &Path) -> Result<PathBuf, ApiError> {
        let response = self
            .authorized(self.client.get(self.certificate_path(id, "/pdf")?))
            .await?
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        let path = directory.join(format!("{}_certificate.pdf", id));
        fs::write(&path, &bytes).await.map_err(|source| ApiError::Io {
            source,
            path: path.clone(),
        })?;

        info!(bytes = bytes.len(), "📥 Saved certificate to '{}'", path.display());
        Ok(path)
    }

    /// Verification is open to anyone, no token is sent.
    #[instrument(skip_all, fields(file = file.name()))]
    pub async fn verify_pdf(&self, file: &PdfFile) -> Result<VerificationResult, ApiError> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.media_type())?;
        let form = Form::new().part("file", part);

        let response = self.client.post(self.url("/api/verify-pdf")).multipart(form).send().await?;
        let result = response.json::<VerificationResult>().await?;

        debug!(valid = result.valid, "Verification result: {}", result.message);
        Ok(result)
    }

    #[instrument(skip(self))]
    pub async fn check_drive_health(&self, drive_id: &str) -> Result<DriveHealth, ApiError> {
        info!("🩺 Checking health of drive '{}'...", drive_id);

        let response = self
            .authorized(self.client.post(self.url("/api/drive/health")).json(&DriveHealthRequest { drive_id }))
            .await?
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status_code = %status, "⚠️ Health check for '{}' failed. Response: {}", drive_id, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let health = response.json::<DriveHealth>().await?;
        info!(health_score = ?health.health_score, "🩺 Checking health of drive '{}'... OK", drive_id);
        Ok(health)
    }
}

#[async_trait]
impl PdfVerifier for ApiClient {
    async fn verify_pdf(&self, file: &PdfFile) -> Result<VerificationResult, ApiError> {
        ApiClient::verify_pdf(self, file).await
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid certificate id '{id}'")]
    InvalidCertificateId { id: String },
    #[error("could not read the session token: {0}")]
    Token(#[source] io::Error),
    #[error("could not write '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::domain::WipeDevice;
    use crate::app_config::AppConfigBuilder;
    use crate::extensions::path_ext::PDF_MEDIA_TYPE;
    use crate::session::MemoryTokenStore;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::env::temp_dir;
    use test_log::test;

    fn client_for(server: &mockito::ServerGuard, tokens: MemoryTokenStore) -> Result<ApiClient, ApiError> {
        let config = AppConfigBuilder::new().base_url(server.url()).build();
        new_client(&config, Arc::new(tokens))
    }

    #[test(tokio::test)]
    async fn authenticated_calls_carry_the_bearer_token() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/list-certificates")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "success": true, "certificates": [] }"#)
            .match_header("authorization", "Bearer secret-token")
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("secret-token"))?;
        let certificates = client.list_certificates().await?;

        mock.assert();
        assert!(certificates.is_empty());

        Ok(())
    }

    #[test(tokio::test)]
    async fn calls_without_a_token_send_no_authorization_header() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/list-certificates")
            .with_status(200)
            .with_body(r#"{ "success": true, "certificates": [] }"#)
            .match_header("authorization", Matcher::Missing)
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::default())?;
        client.list_certificates().await?;

        mock.assert();

        Ok(())
    }

    #[test(tokio::test)]
    async fn list_certificates_keeps_every_layout() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;
        let body = format!(
            r#"{{ "success": true, "certificates": {} }}"#,
            include_str!("../../tests/resources/mixed_certificates.json")
        );

        server
            .mock("GET", "/api/list-certificates")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;
        let certificates = client.list_certificates().await?;

        assert_eq!(
            certificates.iter().map(Certificate::certificate_id).collect::<Vec<_>>(),
            vec!["cert-direct-0001", "cert-nested-0002", "", "cert-direct-0004"]
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn unsuccessful_listing_is_empty() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api/list-certificates")
            .with_status(200)
            .with_body(r#"{ "success": false, "certificates": [{ "certificateId": "x" }] }"#)
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;

        assert!(client.list_certificates().await?.is_empty());

        Ok(())
    }

    #[test(tokio::test)]
    async fn get_certificate_returns_none_for_an_empty_body() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        server.mock("GET", "/api/certificates/c-1").with_status(200).with_body("null").create_async().await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;

        assert_eq!(client.get_certificate("c-1").await?, None);

        Ok(())
    }

    #[test(tokio::test)]
    async fn get_certificate_fails_on_error_status() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api/certificates/missing")
            .with_status(404)
            .with_body(r#"{ "error": "not found" }"#)
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;

        assert!(matches!(client.get_certificate("missing").await, Err(ApiError::Request(_))));

        Ok(())
    }

    #[test(tokio::test)]
    async fn start_wipe_posts_the_device_and_decodes_the_result() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/wipe")
            .match_header("authorization", "Bearer t")
            .match_body(Matcher::Json(json!({
                "device": { "id": "WD-1", "model": "WD Blue", "firmware": "233010WD", "capacity_gb": 1000 },
                "dev_path": "/dev/sda",
                "method": "nist_800_88"
            })))
            .with_status(200)
            .with_body(r#"{ "status": "completed", "certificate_json": { "certificate_id": "c-9" } }"#)
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;
        let request = WipeRequest {
            device: WipeDevice {
                id: "WD-1".to_string(),
                model: "WD Blue".to_string(),
                firmware: "233010WD".to_string(),
                capacity_gb: Some(1000),
            },
            dev_path: "/dev/sda".to_string(),
            method: "nist_800_88".to_string(),
        };

        let response = client.start_wipe(&request).await?;

        mock.assert();
        assert_eq!(response.status.as_deref(), Some("completed"));
        assert_eq!(response.certificate_json, Some(json!({ "certificate_id": "c-9" })));

        Ok(())
    }

    #[test(tokio::test)]
    async fn start_wipe_decodes_error_bodies() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/api/wipe")
            .with_status(400)
            .with_body(r#"{ "error": "Device busy" }"#)
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;
        let response = client
            .start_wipe(&WipeRequest {
                device: WipeDevice {
                    id: "WD-1".to_string(),
                    model: "m".to_string(),
                    firmware: "f".to_string(),
                    capacity_gb: None,
                },
                dev_path: "/dev/sda".to_string(),
                method: "gutmann".to_string(),
            })
            .await?;

        assert_eq!(response.error.as_deref(), Some("Device busy"));

        Ok(())
    }

    #[test(tokio::test)]
    async fn verify_pdf_uploads_a_multipart_file_without_a_token() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/verify-pdf")
            .match_header("authorization", Matcher::Missing)
            .match_header("content-type", Matcher::Regex("multipart/form-data".to_string()))
            .match_body(Matcher::Regex(r#"name="file"; filename="cert.pdf""#.to_string()))
            .with_status(200)
            .with_body(r#"{ "valid": true, "message": "Certificate is authentic" }"#)
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;
        let file = PdfFile::new("cert.pdf", PDF_MEDIA_TYPE, b"%PDF-1.7".to_vec());

        let result = client.verify_pdf(&file).await?;

        mock.assert();
        assert_eq!(
            result,
            VerificationResult {
                valid: true,
                message: "Certificate is authentic".to_string()
            }
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn check_drive_health_raises_status_and_body_on_failure() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/drive/health")
            .match_body(Matcher::Json(json!({ "drive_id": "WD-1" })))
            .with_status(500)
            .with_body("model unavailable")
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;
        let result = client.check_drive_health("WD-1").await;

        mock.assert();
        assert_eq!(result.map_err(|e| e.to_string()), Err("Error 500: model unavailable".to_string()));

        Ok(())
    }

    #[test(tokio::test)]
    async fn check_drive_health_decodes_the_result() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/api/drive/health")
            .with_status(200)
            .with_body(include_str!("../../tests/resources/drive_health_response.json"))
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;
        let health = client.check_drive_health("WD-1").await?;

        assert_eq!(health.health_score, Some(0.45));
        assert_eq!(health.smart_status, "PASSED");

        Ok(())
    }

    #[test(tokio::test)]
    async fn download_saves_the_pdf_under_the_certificate_name() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api/certificates/c-7/pdf")
            .match_header("authorization", "Bearer t")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body("%PDF-1.7 signed")
            .create_async()
            .await;

        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;
        let path = client.download_certificate_pdf("c-7", &temp_dir()).await?;

        assert_eq!(path, temp_dir().join("c-7_certificate.pdf"));
        assert_eq!(fs::read(&path).await.map_err(ApiError::Token)?, b"%PDF-1.7 signed".to_vec());

        Ok(())
    }

    #[test(tokio::test)]
    async fn certificate_calls_reject_ids_that_are_not_plain_segments() -> Result<(), ApiError> {
        let server = mockito::Server::new_async().await;
        let client = client_for(&server, MemoryTokenStore::with_token("t"))?;

        for id in ["../escape", "a/b", r"a\b", "..", "c-1?x=1", ""] {
            let download = client.download_certificate_pdf(id, &temp_dir()).await;
            assert!(matches!(download, Err(ApiError::InvalidCertificateId { id: ref rejected }) if rejected == id), "{}", id);
            assert!(matches!(client.get_certificate(id).await, Err(ApiError::InvalidCertificateId { .. })), "{}", id);
        }

        Ok(())
    }
}
