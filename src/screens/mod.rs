pub mod account;
pub mod certificate_detail;
pub mod certificates;
pub mod dashboard;
pub mod download;
pub mod health;
pub mod navigation;
pub mod verify;
pub mod wipe;

pub const SIGN_IN_PROMPT: &str = "You are not signed in. Run `wipedash login --email <email>` to continue.";

/// The first `length` characters of a certificate id, as shown in lists.
fn short_id(id: &str, length: usize) -> String {
    id.chars().take(length).collect()
}
