use async_trait::async_trait;
use std::fmt::Debug;
use std::io;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
#[cfg(test)]
use std::sync::Mutex;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

#[cfg(unix)]
const TOKEN_FILE_MODE: u32 = 0o600;

/// Persists the bearer token of the signed-in user. No token means unauthenticated.
#[async_trait]
pub trait TokenStore: Debug + Send + Sync {
    async fn load(&self) -> io::Result<Option<String>>;

    async fn save(&self, token: &str) -> io::Result<()>;

    async fn clear(&self) -> io::Result<()>;
}

/// Keeps the token in a single file, one token per client.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileTokenStore { path: path.into() }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn save(&self, token: &str) -> io::Result<()> {
        debug!(path = %self.path.display(), "🔑 Storing session token");

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(TOKEN_FILE_MODE);

        let mut file = options.open(&self.path).await?;
        // An existing file keeps its old mode on open
        #[cfg(unix)]
        file.set_permissions(std::fs::Permissions::from_mode(TOKEN_FILE_MODE)).await?;

        file.write_all(token.as_bytes()).await?;
        file.flush().await
    }

    async fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path).await {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        MemoryTokenStore {
            token: Mutex::new(Some(token.to_string())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> io::Result<Option<String>> {
        Ok(self.slot().clone())
    }

    async fn save(&self, token: &str) -> io::Result<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> io::Result<()> {
        *self.slot() = None;
        Ok(())
    }
}
