use crate::api::{ApiClient, AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, User};
use std::io;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

const NETWORK_ERROR: &str = "Network error";

/// Signs in and stores the token when the service hands one out. Never fails, a network problem is
/// reported as an unsuccessful response.
#[instrument(skip(api, password))]
pub async fn login(api: &ApiClient, email: &str, password: &str) -> AuthResponse {
    info!("🔑 Signing in...");

    let response = match post_auth(api, "/auth/login", &LoginRequest { email, password }).await {
        Ok(response) => response,
        Err(e) => {
            warn!("⚠️ Sign-in request failed: {}", e);
            return AuthResponse::failure(NETWORK_ERROR);
        }
    };

    if let (true, Some(token)) = (response.success, &response.token) {
        if let Err(e) = api.tokens().save(token).await {
            warn!("⚠️ Could not store the session token: {}", e);
            return AuthResponse::failure(&SessionError::from(e).to_string());
        }
        info!("🔑 Signing in... OK");
    } else {
        info!("🔑 Signing in... rejected: {}", response.message.as_deref().unwrap_or("no reason given"));
    }

    response
}

#[instrument(skip(api, password))]
pub async fn register(api: &ApiClient, username: &str, email: &str, password: &str) -> AuthResponse {
    match post_auth(api, "/auth/register", &RegisterRequest { username, email, password }).await {
        Ok(response) => {
            info!(success = response.success, "📝 Registration answered: {}", response.message.as_deref().unwrap_or(""));
            response
        }
        Err(e) => {
            warn!("⚠️ Registration request failed: {}", e);
            AuthResponse::failure(NETWORK_ERROR)
        }
    }
}

async fn post_auth<T: serde::Serialize>(api: &ApiClient, path: &str, body: &T) -> Result<AuthResponse, reqwest::Error> {
    api.http().post(api.url(path)).json(body).send().await?.json::<AuthResponse>().await
}

pub async fn logout(api: &ApiClient) -> Result<(), SessionError> {
    api.tokens().clear().await?;
    info!("👋 Signed out");
    Ok(())
}

/// The signed-in user, or `None` when there is no token or the service does not accept it.
#[instrument(skip(api))]
pub async fn profile(api: &ApiClient) -> Option<User> {
    let token = match api.tokens().load().await {
        Ok(Some(token)) => token,
        Ok(None) => return None,
        Err(e) => {
            warn!("⚠️ Could not read the session token: {}", e);
            return None;
        }
    };

    match fetch_profile(api, &token).await {
        Ok(ProfileResponse { success: true, user }) => user,
        Ok(_) => {
            debug!("Profile lookup rejected the session token");
            None
        }
        Err(e) => {
            debug!("Profile lookup failed: {}", e);
            None
        }
    }
}

async fn fetch_profile(api: &ApiClient, token: &str) -> Result<ProfileResponse, reqwest::Error> {
    api.http().get(api.url("/profile")).bearer_auth(token).send().await?.json::<ProfileResponse>().await
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("could not update the session token: {0}")]
    Token(#[from] io::Error),
}
