use super::{SequenceSource, parse_sequence};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Integer sequence stored in a local text file
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait]
impl SequenceSource for LocalFileSource {
    async fn read_sequence(&self) -> Result<Vec<i64>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        debug!(path = %self.path.display(), bytes = text.len(), "read sequence file");

        parse_sequence(&text).with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("zerosum-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_read_local_file() {
        let path = temp_path("local.txt");
        tokio::fs::write(&path, "1, -1, 4\n-4 2\n").await.unwrap();

        let values = LocalFileSource::new(&path).read_sequence().await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(values.unwrap(), vec![1, -1, 4, -4, 2]);
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let path = temp_path("missing.txt");
        let err = LocalFileSource::new(&path).read_sequence().await.unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_error() {
        let path = temp_path("bad.txt");
        tokio::fs::write(&path, "1 2 three").await.unwrap();

        let result = LocalFileSource::new(&path).read_sequence().await;
        tokio::fs::remove_file(&path).await.unwrap();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("'three'"));
    }
}
