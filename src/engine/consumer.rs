// Consumer - ファイルタスクの起動とワーカープール

use crate::{
    core::{FileOutcome, FileTask, ResultReporter, RunSummary, ScanConfig},
    services::{accumulator::SharedAccumulator, processing::process_single_file},
    storage::StorageBackend,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

/// 1ファイルにつき1タスクを起動（上限なしのファンアウト用）
pub fn spawn_file_task<S, C, R>(
    tasks: &mut JoinSet<FileOutcome>,
    task: FileTask,
    storage: Arc<S>,
    config: Arc<C>,
    reporter: Arc<R>,
) where
    S: StorageBackend + 'static,
    C: ScanConfig + 'static,
    R: ResultReporter + 'static,
{
    tasks.spawn(async move {
        process_single_file(task, storage.as_ref(), config.as_ref(), reporter.as_ref()).await
    });
}

/// 単一ワーカー: キューが閉じるまでパスを取り出して処理し、部分サマリーを返す
pub fn spawn_single_consumer<S, C, R>(
    worker_id: usize,
    storage: Arc<S>,
    config: Arc<C>,
    reporter: Arc<R>,
    accumulator: Arc<SharedAccumulator>,
    work_rx: Arc<Mutex<mpsc::Receiver<PathBuf>>>,
) -> tokio::task::JoinHandle<RunSummary>
where
    S: StorageBackend + 'static,
    C: ScanConfig + 'static,
    R: ResultReporter + 'static,
{
    tokio::spawn(async move {
        let mut tally = RunSummary::default();
        loop {
            // 次の作業を取得
            let path = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(path) => path,
                    None => break, // チャンネル終了
                }
            };

            let task = FileTask::new(path, Arc::clone(&accumulator));
            let outcome =
                process_single_file(task, storage.as_ref(), config.as_ref(), reporter.as_ref())
                    .await;
            tally.record(&outcome);
        }
        tracing::trace!(worker_id, processed = tally.files_processed, "worker finished");
        tally
    })
}

/// Consumers: 固定数のワーカープール
pub fn spawn_consumers<S, C, R>(
    storage: Arc<S>,
    config: Arc<C>,
    reporter: Arc<R>,
    accumulator: Arc<SharedAccumulator>,
    work_rx: mpsc::Receiver<PathBuf>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<RunSummary>>
where
    S: StorageBackend + 'static,
    C: ScanConfig + 'static,
    R: ResultReporter + 'static,
{
    let work_rx = Arc::new(Mutex::new(work_rx));

    (0..worker_count)
        .map(|worker_id| {
            spawn_single_consumer(
                worker_id,
                Arc::clone(&storage),
                Arc::clone(&config),
                Arc::clone(&reporter),
                Arc::clone(&accumulator),
                Arc::clone(&work_rx),
            )
        })
        .collect()
}
