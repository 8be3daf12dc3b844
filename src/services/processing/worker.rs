// Worker - 単一ファイル処理機能

use super::parser::parse_number;
use crate::core::{FileOutcome, FileTask, ResultReporter, ScanConfig};
use crate::storage::StorageBackend;

/// 単一ファイルの処理
///
/// 再確認 → 読み込み → 解析 → 報告 → 待機 → 加算 の順に実行する。
/// どの段階で失敗しても呼び出し元へエラーは返さず、寄与0として扱う。
pub async fn process_single_file<S, C, R>(
    task: FileTask,
    storage: &S,
    config: &C,
    reporter: &R,
) -> FileOutcome
where
    S: StorageBackend + ?Sized,
    C: ScanConfig + ?Sized,
    R: ResultReporter + ?Sized,
{
    // 発見時から状態が変わっている可能性があるため開始時に一度だけ確認
    if !storage.is_regular_file_async(&task.path).await {
        tracing::debug!(path = %task.path.display(), "no longer a regular file");
        return FileOutcome::Skipped;
    }

    let result = async {
        let content = storage.read_bytes(&task.path).await?;
        parse_number(&content)
    }
    .await;

    let outcome = match result {
        Ok(number) => FileOutcome::Number(number),
        Err(error) => {
            tracing::debug!(path = %task.path.display(), %error, "no number");
            FileOutcome::NoNumber {
                reason: error.to_string(),
            }
        }
    };

    reporter.report_file(&task.file_name(), &outcome);

    let delay = config.task_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    task.accumulator.add(outcome.contribution()).await;
    outcome
}
