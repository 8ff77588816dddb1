use crate::api::{ApiClient, User};
use crate::certificate::{Certificate, UNKNOWN};
use crate::screens::navigation::Route;
use crate::screens::short_id;
use crate::session;
use std::fmt::{Display, Formatter};
use tracing::{instrument, warn};

const RECENT_CERTIFICATES: usize = 3;

#[derive(Debug)]
pub enum DashboardScreen {
    Landing,
    Overview { user: User, certificates: Vec<Certificate> },
}

#[instrument(skip_all)]
pub async fn load(api: &ApiClient) -> DashboardScreen {
    let Some(user) = session::profile(api).await else {
        return DashboardScreen::Landing;
    };

    match api.list_certificates().await {
        Ok(certificates) => DashboardScreen::Overview { user, certificates },
        Err(e) => {
            warn!("⚠️ Could not load certificates for the overview: {}", e);
            DashboardScreen::Landing
        }
    }
}

impl Display for DashboardScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardScreen::Landing => {
                writeln!(f, "Secure Data Sanitization")?;
                writeln!(
                    f,
                    "Military-grade data wiping, health monitoring, and certificate management. Keep your drives secure and data protected."
                )?;
                writeln!(f)?;
                for route in Route::features() {
                    writeln!(f, "  {}", route)?;
                }
                writeln!(f)?;
                write!(f, "Sign in with `wipedash login` or create an account with `wipedash register`.")
            }
            DashboardScreen::Overview { user, certificates } => {
                writeln!(f, "Welcome back, {}", user.username)?;
                writeln!(f)?;
                writeln!(f, "Total certificates: {}", certificates.len())?;
                writeln!(f, "Security level:     Military")?;
                writeln!(f, "System status:      Online")?;
                writeln!(f)?;
                for route in Route::features() {
                    writeln!(f, "  {}", route)?;
                }

                if !certificates.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "Recent certificates")?;
                    for certificate in certificates.iter().take(RECENT_CERTIFICATES) {
                        let id = certificate.certificate_id();
                        let label = if id.is_empty() { UNKNOWN.to_string() } else { short_id(&id, 8) };
                        writeln!(f, "  Certificate {}...  device {}", label, certificate.device_id())?;
                    }
                    if certificates.len() > RECENT_CERTIFICATES {
                        writeln!(f, "  View all certificates with `wipedash certificates`")?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::new_client;
    use crate::app_config::AppConfigBuilder;
    use crate::session::MemoryTokenStore;
    use serde_json::json;
    use std::sync::Arc;
    use test_log::test;

    fn user() -> User {
        User {
            user_id: "u-1".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test(tokio::test)]
    async fn signed_out_users_get_the_landing_page() {
        let server = mockito::Server::new_async().await;
        let config = AppConfigBuilder::new().base_url(server.url()).build();
        let api = new_client(&config, Arc::new(MemoryTokenStore::default())).unwrap();

        assert!(matches!(load(&api).await, DashboardScreen::Landing));
    }

    #[test]
    fn overview_lists_at_most_three_recent_certificates() {
        let certificates = (1..=4)
            .map(|i| Certificate::new(json!({ "certificateId": format!("certificate-{}", i), "device": "WD-1" })))
            .collect();
        let screen = DashboardScreen::Overview { user: user(), certificates };

        let rendered = screen.to_string();

        assert!(rendered.contains("Total certificates: 4"));
        assert!(rendered.contains("Certificate certific...  device WD-1"));
        assert_eq!(rendered.matches("Certificate certific...").count(), 3);
        assert!(rendered.contains("View all certificates"));
    }

    #[test]
    fn overview_labels_certificates_without_an_id_as_unknown() {
        let screen = DashboardScreen::Overview {
            user: user(),
            certificates: vec![Certificate::new(json!({ "certificate_id": "flat" }))],
        };

        assert!(screen.to_string().contains("Certificate Unknown..."));
    }
}
