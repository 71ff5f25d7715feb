use std::path::Path;
use taskdash_core::TaskdashResult;
use tokio::fs;

/// Writes whole files through a temporary file in the same directory
/// followed by a rename, so readers never observe a half-written file.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Creates missing parent directories, then replaces `path` with `data`.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TaskdashResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();
        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Reads the file, or `None` if it does not exist.
    pub async fn read_if_exists(path: &Path) -> TaskdashResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested/taskdash/settings.json");

        AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap();

        let read = AtomicWriter::read_if_exists(&file_path).await.unwrap();
        assert_eq!(read.as_deref(), Some(&b"{}"[..]));
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("settings.json");

        AtomicWriter::write_atomic(&file_path, b"First").await.unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").await.unwrap();

        let read = AtomicWriter::read_if_exists(&file_path).await.unwrap();
        assert_eq!(read.as_deref(), Some(&b"Second"[..]));
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let read = AtomicWriter::read_if_exists(&dir.path().join("absent.json"))
            .await
            .unwrap();
        assert!(read.is_none());
    }
}
