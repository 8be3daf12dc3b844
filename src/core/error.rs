// 集計処理専用のカスタムエラー型定義

use std::path::PathBuf;
use thiserror::Error;

/// 集計処理固有のエラー型
#[derive(Error, Debug)]
pub enum SumError {
    #[error("引数エラー: {path:?}")]
    ArgumentError { path: Option<PathBuf> },

    #[error("解析エラー: {input:?} は整数ではありません")]
    ParseError { input: String },

    #[error("ファイル読み込みエラー: {path} - {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl SumError {
    /// 引数エラーの作成
    pub fn argument(path: Option<PathBuf>) -> Self {
        Self::ArgumentError { path }
    }

    /// 解析エラーの作成
    pub fn parse(input: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.into(),
        }
    }

    /// ファイル読み込みエラーの作成
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.into(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// タスク内で完結する（寄与0として扱われる）エラーかどうか
    pub fn is_file_local(&self) -> bool {
        matches!(self, Self::ParseError { .. } | Self::FileReadError { .. })
    }
}

/// 集計処理の結果型
pub type SumResult<T> = std::result::Result<T, SumError>;

impl From<tokio::task::JoinError> for SumError {
    fn from(error: tokio::task::JoinError) -> Self {
        SumError::TaskError { source: error }
    }
}
