use crate::core::SumResult;
use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

pub mod local;

/// 走査対象ストレージのトレイト
///
/// ディレクトリ列挙・通常ファイル判定・テキスト読み込みを抽象化する。
#[automock]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// ルート配下の子孫パスを遅延列挙する（ルート自身は含まない、順序は不定）
    ///
    /// ブロッキングI/Oを伴うため、非同期コンテキストからは
    /// `spawn_blocking` 経由で消費すること。
    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + Send>;

    /// シンボリックリンクを辿らずに通常ファイルかどうかを判定（ブロッキング）
    fn is_regular_file(&self, path: &Path) -> bool;

    /// `is_regular_file` の非同期版（タスク開始時の再確認用）
    async fn is_regular_file_async(&self, path: &Path) -> bool;

    /// ファイル全体をバイト列として読み込む
    async fn read_bytes(&self, path: &Path) -> SumResult<Vec<u8>>;
}

// StorageBackend for Box<dyn StorageBackend>
#[async_trait]
impl StorageBackend for Box<dyn StorageBackend> {
    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + Send> {
        self.as_ref().walk(root)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        self.as_ref().is_regular_file(path)
    }

    async fn is_regular_file_async(&self, path: &Path) -> bool {
        self.as_ref().is_regular_file_async(path).await
    }

    async fn read_bytes(&self, path: &Path) -> SumResult<Vec<u8>> {
        self.as_ref().read_bytes(path).await
    }
}
