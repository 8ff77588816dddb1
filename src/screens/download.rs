use crate::api::ApiClient;
use crate::screens::SIGN_IN_PROMPT;
use crate::session;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use tracing::{instrument, warn};

#[derive(Debug)]
pub enum DownloadScreen {
    SignedOut,
    Saved(PathBuf),
    Failed { certificate_id: String },
}

#[instrument(skip(api))]
pub async fn download(api: &ApiClient, id: &str, directory: &Path) -> DownloadScreen {
    if session::profile(api).await.is_none() {
        return DownloadScreen::SignedOut;
    }

    match api.download_certificate_pdf(id, directory).await {
        Ok(path) => DownloadScreen::Saved(path),
        Err(e) => {
            warn!(certificate_id = id, "⚠️ Download failed: {}", e);
            DownloadScreen::Failed {
                certificate_id: id.to_string(),
            }
        }
    }
}

impl Display for DownloadScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadScreen::SignedOut => f.write_str(SIGN_IN_PROMPT),
            DownloadScreen::Saved(path) => write!(f, "Saved certificate PDF to {}", path.display()),
            DownloadScreen::Failed { certificate_id } => write!(f, "Could not download the PDF for certificate {}.", certificate_id),
        }
    }
}
