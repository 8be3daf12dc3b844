use crate::core::{SumError, SumResult};
use crate::services::{default_pool_size, DefaultScanConfig};
use clap::{error::ErrorKind, Parser};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "dir_sum")]
#[command(about = "Sum the integers stored in every file under a directory tree")]
#[command(version)]
pub struct Cli {
    /// Directory to scan
    pub path: Option<PathBuf>,

    /// Delay each file task waits before adding its value, in milliseconds
    #[arg(short, long, default_value = "1000")]
    pub delay_ms: u64,

    /// Use a bounded pool of N workers instead of one task per file
    #[arg(short, long, conflicts_with = "pool")]
    pub workers: Option<usize>,

    /// Use a bounded pool sized from the CPU count
    #[arg(long)]
    pub pool: bool,

    /// Capacity of the channel carrying discovered paths
    #[arg(long, default_value = "100")]
    pub buffer_size: usize,

    /// Diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// コマンドライン引数から走査設定を構築
    pub fn to_config(&self) -> DefaultScanConfig {
        let config = DefaultScanConfig::new()
            .with_task_delay(Duration::from_millis(self.delay_ms))
            .with_buffer_size(self.buffer_size);

        match (self.workers, self.pool) {
            (Some(workers), _) => config.with_max_workers(workers),
            (None, true) => config.with_max_workers(default_pool_size()),
            (None, false) => config,
        }
    }
}

/// clapの解析エラーのうち、引数エラーとして扱うもの（余分な位置引数・未知のオプション）
pub fn is_unexpected_argument(error: &clap::Error) -> bool {
    error.kind() == ErrorKind::UnknownArgument
}

/// 走査ルートの検証（未指定・存在しない・ディレクトリでない場合は引数エラー）
pub fn validate_root(path: Option<&Path>) -> SumResult<PathBuf> {
    match path {
        Some(path) if path.is_dir() => Ok(path.to_path_buf()),
        other => Err(SumError::argument(other.map(Path::to_path_buf))),
    }
}
