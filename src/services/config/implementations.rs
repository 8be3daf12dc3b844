// 設定管理の具象実装

use crate::core::{ConcurrencyMode, ScanConfig, SumError, SumResult};
use std::time::Duration;

/// 既定のタスク待機時間
pub const DEFAULT_TASK_DELAY: Duration = Duration::from_secs(1);

/// 既定のファイル発見チャンネル容量
pub const DEFAULT_BUFFER_SIZE: usize = 100;

/// ワーカープール使用時の既定ワーカー数
pub fn default_pool_size() -> usize {
    num_cpus::get().max(1) * 2
}

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultScanConfig {
    task_delay: Duration,
    concurrency: ConcurrencyMode,
    buffer_size: usize,
}

impl DefaultScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_delay(mut self, task_delay: Duration) -> Self {
        self.task_delay = task_delay;
        self
    }

    pub fn with_concurrency(mut self, concurrency: ConcurrencyMode) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// 固定数ワーカーによるプール実行に切り替える
    pub fn with_max_workers(self, workers: usize) -> Self {
        self.with_concurrency(ConcurrencyMode::Pool(workers))
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
}

impl Default for DefaultScanConfig {
    fn default() -> Self {
        Self {
            task_delay: DEFAULT_TASK_DELAY,
            concurrency: ConcurrencyMode::Unbounded,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ScanConfig for DefaultScanConfig {
    fn task_delay(&self) -> Duration {
        self.task_delay
    }

    fn concurrency(&self) -> ConcurrencyMode {
        self.concurrency
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }
}

/// 走査開始前の設定検証
pub fn validate_config<C: ScanConfig + ?Sized>(config: &C) -> SumResult<()> {
    if config.concurrency() == ConcurrencyMode::Pool(0) {
        return Err(SumError::configuration(
            "ワーカー数は1以上である必要があります",
        ));
    }

    if config.channel_buffer_size() == 0 {
        return Err(SumError::configuration(
            "バッファサイズは1以上である必要があります",
        ));
    }

    Ok(())
}
