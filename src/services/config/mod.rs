// 設定管理機能
// タスク待機時間、並列実行形態、チャンネル容量

pub mod implementations;

// 公開API
pub use implementations::{
    default_pool_size, validate_config, DefaultScanConfig, DEFAULT_BUFFER_SIZE,
    DEFAULT_TASK_DELAY,
};
