// 集計システムのトレイト定義

use super::types::{ConcurrencyMode, FileOutcome, Number};
use mockall::automock;
use std::time::Duration;

/// 走査設定を抽象化するトレイト
#[automock]
pub trait ScanConfig: Send + Sync {
    /// 各タスクが加算前に待機する時間
    fn task_delay(&self) -> Duration;

    /// 並列実行の形態
    fn concurrency(&self) -> ConcurrencyMode;

    /// ファイル発見チャンネルのバッファサイズ
    fn channel_buffer_size(&self) -> usize;
}

impl ScanConfig for Box<dyn ScanConfig> {
    fn task_delay(&self) -> Duration {
        self.as_ref().task_delay()
    }

    fn concurrency(&self) -> ConcurrencyMode {
        self.as_ref().concurrency()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }
}

/// 結果出力の抽象化トレイト
///
/// 複数タスクから同時に呼ばれるため、1回の呼び出しで1行をまとめて書き出すこと。
#[automock]
pub trait ResultReporter: Send + Sync {
    /// 1ファイル分の結果を報告
    fn report_file(&self, file_name: &str, outcome: &FileOutcome);

    /// 全タスク完了後の合計値を報告
    fn report_total(&self, total: Number);
}
