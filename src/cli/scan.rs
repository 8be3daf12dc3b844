use super::args::{validate_root, Cli};
use crate::core::{RunSummary, ScanConfig, SumResult};
use crate::engine::sum_directory;

/// 引数エラー時に標準出力へ書き出す固定メッセージ
pub const ARGUMENT_ERROR_MESSAGE: &str = "Argument is incorrect";

/// コマンドライン引数に従って走査を実行
pub async fn execute_scan(cli: &Cli) -> SumResult<RunSummary> {
    let root = validate_root(cli.path.as_deref())?;
    let config = cli.to_config();

    tracing::info!(
        root = %root.display(),
        delay_ms = config.task_delay().as_millis() as u64,
        concurrency = ?config.concurrency(),
        "starting scan"
    );

    sum_directory(&root, config).await
}
