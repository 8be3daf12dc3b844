// 集計処理に関連するデータ型定義

use crate::services::accumulator::SharedAccumulator;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// 集計対象の数値型
pub type Number = i64;

/// 並列実行の形態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyMode {
    /// 発見したファイルごとに1タスク（上限なし）
    Unbounded,
    /// 固定数のワーカーがキューからパスを取り出す
    Pool(usize),
}

/// 単一ファイルの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// 整数として解釈できた
    Number(Number),
    /// 読み込みまたは解析に失敗した（寄与は0）
    NoNumber { reason: String },
    /// タスク開始時に通常ファイルではなくなっていた
    Skipped,
}

impl FileOutcome {
    /// 累積値への寄与
    pub fn contribution(&self) -> Number {
        match self {
            Self::Number(value) => *value,
            Self::NoNumber { .. } | Self::Skipped => 0,
        }
    }

    /// コンソールへ1行出力する対象かどうか
    pub fn is_reported(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// 1ファイル分の作業単位
///
/// パスは値で保持し、累積器は実行中の全タスクで共有する。
#[derive(Debug)]
pub struct FileTask {
    pub path: PathBuf,
    pub accumulator: Arc<SharedAccumulator>,
}

impl FileTask {
    pub fn new(path: PathBuf, accumulator: Arc<SharedAccumulator>) -> Self {
        Self { path, accumulator }
    }

    /// 表示用のファイル名（パスの最終要素）
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// 1回の走査全体のサマリー
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunSummary {
    pub total: Number,
    pub files_processed: usize,
    pub numbers_parsed: usize,
    pub no_number_count: usize,
    pub skipped_count: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    /// 個別結果をサマリーに反映
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Number(_) => {
                self.files_processed += 1;
                self.numbers_parsed += 1;
            }
            FileOutcome::NoNumber { .. } => {
                self.files_processed += 1;
                self.no_number_count += 1;
            }
            FileOutcome::Skipped => self.skipped_count += 1,
        }
    }

    /// ワーカーごとの部分サマリーを合算
    pub fn merge(&mut self, other: &RunSummary) {
        self.files_processed += other.files_processed;
        self.numbers_parsed += other.numbers_parsed;
        self.no_number_count += other.no_number_count;
        self.skipped_count += other.skipped_count;
    }
}
