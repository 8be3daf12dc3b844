// 高レベル公開API
// WorkDispatcherを簡単に使用できるようにするための便利な関数

use super::WorkDispatcher;
use crate::{
    core::{RunSummary, ScanConfig, SumResult},
    services::{ConsoleReporter, MemoryReporter},
    storage::local::LocalStorageBackend,
};
use std::path::Path;

/// ローカルファイルシステムを走査し、結果を標準出力へ書き出すディスパッチャを作成
pub fn create_console_dispatcher<C>(
    config: C,
) -> WorkDispatcher<LocalStorageBackend, C, ConsoleReporter>
where
    C: ScanConfig + 'static,
{
    WorkDispatcher::new(LocalStorageBackend::new(), config, ConsoleReporter::new())
}

/// 出力行をメモリに保持するディスパッチャを作成（組み込み・テスト用）
pub fn create_memory_dispatcher<C>(
    config: C,
) -> (WorkDispatcher<LocalStorageBackend, C, MemoryReporter>, MemoryReporter)
where
    C: ScanConfig + 'static,
{
    let reporter = MemoryReporter::new();
    let dispatcher = WorkDispatcher::new(LocalStorageBackend::new(), config, reporter.clone());
    (dispatcher, reporter)
}

/// ディレクトリを走査して合計を標準出力へ書き出す
pub async fn sum_directory<C>(root: &Path, config: C) -> SumResult<RunSummary>
where
    C: ScanConfig + 'static,
{
    create_console_dispatcher(config).run(root).await
}
