//! Config file persistence

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::SaveError;

/// Persists generated text under a filename
#[async_trait]
pub trait FileSaver: Send + Sync {
    async fn save(&self, filename: &str, contents: &[u8]) -> Result<PathBuf, SaveError>;
}

/// Writes files into a directory
///
/// Contents land in `.<filename>.<pid>.part` first and are renamed into
/// place, so a failed write never leaves a truncated config behind and
/// concurrent runs never share a temp file.
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> SaveError + '_ {
    move |source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl FileSaver for DirectorySaver {
    async fn save(&self, filename: &str, contents: &[u8]) -> Result<PathBuf, SaveError> {
        let target = self.dir.join(filename);
        let partial = self.dir.join(partial_name(filename));

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(io_err(&self.dir))?;

        if let Err(e) = write_private(&partial, contents).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(e);
        }

        tokio::fs::rename(&partial, &target)
            .await
            .map_err(io_err(&target))?;

        tracing::debug!("Wrote {} bytes to {}", contents.len(), target.display());
        Ok(target)
    }
}

fn partial_name(filename: &str) -> String {
    format!(".{}.{}.part", filename, std::process::id())
}

/// Write a file readable only by the owner (it holds a private key)
async fn write_private(path: &Path, contents: &[u8]) -> Result<(), SaveError> {
    use tokio::io::AsyncWriteExt;

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await.map_err(io_err(path))?;
    file.write_all(contents).await.map_err(io_err(path))?;
    file.sync_all().await.map_err(io_err(path))?;
    Ok(())
}
