use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use uuid::Uuid;

use crate::domain::repository::ImageStore;
use crate::error::ApiError;

/// Keeps gallery files on local disk under fresh UUID names. The directory
/// is served statically by the router.
#[derive(Clone)]
pub struct FsImageStore {
    dir: PathBuf,
}

impl FsImageStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Creates the upload directory. Run once at startup.
    pub async fn prepare(&self) -> Result<(), ApiError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .context("create upload directory")?;
        Ok(())
    }
}

impl ImageStore for FsImageStore {
    async fn save(&self, ext: &str, bytes: &[u8]) -> Result<String, ApiError> {
        let name = format!("{}.{ext}", Uuid::new_v4());
        tokio::fs::write(self.dir.join(&name), bytes)
            .await
            .context("write image file")?;
        Ok(name)
    }

    async fn remove(&self, name: &str) -> Result<(), ApiError> {
        // Stored names are bare file names; ignore anything else.
        let Some(file_name) = Path::new(name).file_name() else {
            return Ok(());
        };
        match tokio::fs::remove_file(self.dir.join(file_name)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(anyhow::Error::new(err).context("remove image file").into()),
        }
    }
}
