use super::StorageBackend;
use crate::core::{SumError, SumResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Debug, Clone, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StorageBackend for LocalStorageBackend {
    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + Send> {
        let entries = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(error) => {
                    // 読めないサブディレクトリ等は飛ばして走査を続ける
                    tracing::warn!(%error, "skipping unreadable entry");
                    None
                }
            });
        Box::new(entries)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path)
            .map(|metadata| metadata.file_type().is_file())
            .unwrap_or(false)
    }

    async fn is_regular_file_async(&self, path: &Path) -> bool {
        tokio::fs::symlink_metadata(path)
            .await
            .map(|metadata| metadata.file_type().is_file())
            .unwrap_or(false)
    }

    async fn read_bytes(&self, path: &Path) -> SumResult<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|source| SumError::file_read(path, source))
    }
}
