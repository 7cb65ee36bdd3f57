use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::http_error::AppError;

/// Writes uploaded files under a single directory and hands back the public
/// `/uploads/<name>` path that gets persisted. Constructed once at startup.
pub struct UploadStore {
    base_dir: PathBuf,
}

impl UploadStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.base_dir
    }

    /// Stores the full byte buffer and returns the public path. Generated
    /// names are `<unix-millis>-<uuid>.<ext>` so repeated uploads of the
    /// same client filename never collide.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        tokio::fs::create_dir_all(&self.base_dir).await.map_err(|e| {
            tracing::error!("failed to create upload dir {:?}: {}", self.base_dir, e);
            AppError::internal()
        })?;

        let ext = Path::new(original_name)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("bin");
        let name = format!("{}-{}.{}", chrono::Utc::now().timestamp_millis(), Uuid::new_v4(), ext);

        let path = self.base_dir.join(&name);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!("failed to write upload {:?}: {}", path, e);
            AppError::internal()
        })?;

        Ok(format!("/uploads/{}", name))
    }
}
