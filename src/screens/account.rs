use crate::api::{ApiClient, AuthResponse};
use crate::session::{self, SessionError};
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum AccountScreen {
    SignedIn(AuthResponse),
    Registered(AuthResponse),
    SignedOut(Result<(), String>),
}

pub async fn login(api: &ApiClient, email: &str, password: &str) -> AccountScreen {
    AccountScreen::SignedIn(session::login(api, email, password).await)
}

pub async fn register(api: &ApiClient, username: &str, email: &str, password: &str) -> AccountScreen {
    AccountScreen::Registered(session::register(api, username, email, password).await)
}

pub async fn logout(api: &ApiClient) -> AccountScreen {
    AccountScreen::SignedOut(session::logout(api).await.map_err(|e: SessionError| e.to_string()))
}

impl Display for AccountScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountScreen::SignedIn(response) if response.success && response.token.is_some() => write!(f, "Signed in."),
            AccountScreen::SignedIn(response) => write!(f, "{}", response.message.as_deref().unwrap_or("Login failed")),
            AccountScreen::Registered(response) if response.success => {
                write!(f, "{}", response.message.as_deref().unwrap_or("Account created. You can now sign in."))
            }
            AccountScreen::Registered(response) => write!(f, "{}", response.message.as_deref().unwrap_or("Registration failed")),
            AccountScreen::SignedOut(Ok(())) => write!(f, "Signed out."),
            AccountScreen::SignedOut(Err(message)) => write!(f, "{}", message),
        }
    }
}
