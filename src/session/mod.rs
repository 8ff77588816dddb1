mod auth;
mod token_store;

pub use auth::{SessionError, login, logout, profile, register};
#[cfg(test)]
pub use token_store::MemoryTokenStore;
pub use token_store::{FileTokenStore, TokenStore};
