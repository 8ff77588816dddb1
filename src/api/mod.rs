mod client;
mod domain;

pub use client::{ApiClient, ApiError, new_client};
pub use domain::{AuthResponse, DriveHealth, LoginRequest, ProfileResponse, RegisterRequest, User, VerificationResult, WipeDevice, WipeRequest, WipeResponse};
