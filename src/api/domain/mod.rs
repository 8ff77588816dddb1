mod auth;
mod certificate_list;
mod drive_health;
mod verification_result;
mod wipe;

pub use auth::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, User};
pub use certificate_list::CertificateListResponse;
pub use drive_health::{DriveHealth, DriveHealthRequest};
pub use verification_result::VerificationResult;
pub use wipe::{WipeDevice, WipeRequest, WipeResponse};
