// WorkDispatcher - ディレクトリ走査・タスク起動・完了待機のオーケストレーション

use super::{
    consumer::{spawn_consumers, spawn_file_task},
    producer::spawn_producer,
};
use crate::{
    core::{
        ConcurrencyMode, FileTask, ResultReporter, RunSummary, ScanConfig, SumResult,
    },
    services::{accumulator::SharedAccumulator, config::validate_config},
    storage::StorageBackend,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// 依存性注入によるディスパッチャ
///
/// ストレージ・設定・報告先をコンストラクタで受け取り、
/// 並列タスクで共有するためArcで保持する。
pub struct WorkDispatcher<S, C, R> {
    storage: Arc<S>,
    config: Arc<C>,
    reporter: Arc<R>,
}

impl<S, C, R> WorkDispatcher<S, C, R>
where
    S: StorageBackend + 'static,
    C: ScanConfig + 'static,
    R: ResultReporter + 'static,
{
    pub fn new(storage: S, config: C, reporter: R) -> Self {
        Self {
            storage: Arc::new(storage),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// ルート配下の全通常ファイルを並列処理し、合計を1回だけ報告する
    ///
    /// ルートの存在確認は呼び出し側の責任。ファイル単位の失敗はエラーにならず、
    /// タスクのパニックのみが `SumError::TaskError` として返る。
    pub async fn run(&self, root: &Path) -> SumResult<RunSummary> {
        validate_config(self.config.as_ref())?;

        let start_time = Instant::now();
        let accumulator = Arc::new(SharedAccumulator::new());

        let (work_tx, work_rx) = mpsc::channel::<PathBuf>(self.config.channel_buffer_size());
        let producer_handle =
            spawn_producer(Arc::clone(&self.storage), root.to_path_buf(), work_tx);

        let mut summary = match self.config.concurrency() {
            ConcurrencyMode::Unbounded => self.fan_out(work_rx, &accumulator).await?,
            ConcurrencyMode::Pool(workers) => self.pool(work_rx, &accumulator, workers).await?,
        };

        // ここまでで全タスクが完了している
        let discovered = producer_handle.await??;

        let total = accumulator.read().await;
        self.reporter.report_total(total);

        summary.total = total;
        summary.elapsed = start_time.elapsed();

        tracing::info!(
            root = %root.display(),
            discovered,
            processed = summary.files_processed,
            no_number = summary.no_number_count,
            total,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "scan finished"
        );

        Ok(summary)
    }

    /// 発見したファイルごとにタスクを起動し、全タスクの完了を待つ
    async fn fan_out(
        &self,
        mut work_rx: mpsc::Receiver<PathBuf>,
        accumulator: &Arc<SharedAccumulator>,
    ) -> SumResult<RunSummary> {
        let mut tasks = JoinSet::new();

        while let Some(path) = work_rx.recv().await {
            tracing::trace!(path = %path.display(), "spawning file task");
            spawn_file_task(
                &mut tasks,
                FileTask::new(path, Arc::clone(accumulator)),
                Arc::clone(&self.storage),
                Arc::clone(&self.config),
                Arc::clone(&self.reporter),
            );
        }

        let mut summary = RunSummary::default();
        while let Some(result) = tasks.join_next().await {
            summary.record(&result?);
        }
        Ok(summary)
    }

    /// 固定数のワーカーで処理し、全ワーカーの完了を待つ
    async fn pool(
        &self,
        work_rx: mpsc::Receiver<PathBuf>,
        accumulator: &Arc<SharedAccumulator>,
        workers: usize,
    ) -> SumResult<RunSummary> {
        let handles = spawn_consumers(
            Arc::clone(&self.storage),
            Arc::clone(&self.config),
            Arc::clone(&self.reporter),
            Arc::clone(accumulator),
            work_rx,
            workers,
        );

        // 1つのワーカーが異常終了しても残りの完了を待ち、最初のエラーを返す
        let mut summary = RunSummary::default();
        let mut first_error = None;
        for handle in handles {
            match handle.await {
                Ok(tally) => summary.merge(&tally),
                Err(error) => {
                    tracing::error!(%error, "worker terminated abnormally");
                    first_error.get_or_insert(error);
                }
            }
        }

        match first_error {
            Some(error) => Err(error.into()),
            None => Ok(summary),
        }
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
