use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
}

impl AuthResponse {
    pub fn failure(message: &str) -> Self {
        AuthResponse {
            success: false,
            token: None,
            message: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub email: String,
}
