// Producer - ファイル発見と配信機能

use crate::core::{SumError, SumResult};
use crate::storage::StorageBackend;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Producer: ディレクトリを走査して通常ファイルのパスのみを配信
///
/// 走査はブロッキングI/Oのため専用スレッドで行い、発見次第チャンネルへ送る。
/// 送信したパス数を返す。走査途中で受信側が消えた場合はチャンネルエラー。
pub fn spawn_producer<S>(
    storage: Arc<S>,
    root: PathBuf,
    work_tx: mpsc::Sender<PathBuf>,
) -> tokio::task::JoinHandle<SumResult<usize>>
where
    S: StorageBackend + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut discovered = 0;
        for path in storage.walk(&root) {
            // ディレクトリ・シンボリックリンク・特殊ファイルはタスクを生成しない
            if !storage.is_regular_file(&path) {
                tracing::trace!(path = %path.display(), "skipping non-regular entry");
                continue;
            }
            if let Err(error) = work_tx.blocking_send(path) {
                return Err(SumError::channel(format!(
                    "受信側が閉じられました ({} を配信できません)",
                    error.0.display()
                )));
            }
            discovered += 1;
        }
        // work_txをドロップしてチャンネル終了シグナル
        Ok(discovered)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::local::LocalStorageBackend;
    use crate::storage::MockStorageBackend;
    use std::path::Path;
    use tempfile::TempDir;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn test_producer_sends_only_regular_files() {
        let mut storage = MockStorageBackend::new();
        storage.expect_walk().returning(|_| {
            Box::new(
                vec![
                    PathBuf::from("/r/a.txt"),
                    PathBuf::from("/r/sub"),
                    PathBuf::from("/r/sub/c.txt"),
                ]
                .into_iter(),
            )
        });
        storage
            .expect_is_regular_file()
            .returning(|path: &Path| path.extension().is_some());

        let (work_tx, mut work_rx) = mpsc::channel::<PathBuf>(10);
        let producer_handle = spawn_producer(Arc::new(storage), PathBuf::from("/r"), work_tx);

        let mut received = Vec::new();
        while let Ok(Some(path)) = timeout(Duration::from_secs(1), work_rx.recv()).await {
            received.push(path);
        }

        assert_eq!(producer_handle.await.unwrap().unwrap(), 2);
        assert_eq!(
            received,
            vec![PathBuf::from("/r/a.txt"), PathBuf::from("/r/sub/c.txt")]
        );
    }

    #[tokio::test]
    async fn test_producer_empty_tree() {
        let temp_dir = TempDir::new().unwrap();
        let (work_tx, mut work_rx) = mpsc::channel::<PathBuf>(10);

        let producer_handle = spawn_producer(
            Arc::new(LocalStorageBackend::new()),
            temp_dir.path().to_path_buf(),
            work_tx,
        );

        // チャンネルが即座に閉じることを確認
        assert!(work_rx.recv().await.is_none());
        assert_eq!(producer_handle.await.unwrap().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_producer_channel_closed_early() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..5 {
            std::fs::write(temp_dir.path().join(format!("{i}.txt")), "1").unwrap();
        }
        let (work_tx, work_rx) = mpsc::channel::<PathBuf>(1);

        // 受信側を即座に閉じる
        drop(work_rx);

        let producer_handle = spawn_producer(
            Arc::new(LocalStorageBackend::new()),
            temp_dir.path().to_path_buf(),
            work_tx,
        );

        // パニックせずにチャンネルエラーで終了すべき
        let error = producer_handle.await.unwrap().unwrap_err();
        assert!(matches!(error, SumError::ChannelError { .. }));
    }
}
