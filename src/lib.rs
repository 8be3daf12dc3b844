//! ディレクトリツリー内の全通常ファイルを並列に読み込み、
//! 整数として解釈できた値を共有累積器へ加算するツール。
//!
//! - `core`: トレイト・型・エラー定義
//! - `services`: 累積器、ファイル単位の処理、設定、結果出力
//! - `storage`: ディレクトリ走査とファイル読み込み
//! - `engine`: 走査・タスク起動・完了待機のオーケストレーション
//! - `cli`: コマンドライン引数とログ設定

pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod storage;

pub use crate::core::{FileOutcome, Number, RunSummary, SumError, SumResult};
pub use engine::{sum_directory, WorkDispatcher};
pub use services::{DefaultScanConfig, SharedAccumulator};
