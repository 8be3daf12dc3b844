// エンジン層 - 並列処理とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod consumer;
pub mod dispatcher;
pub mod producer;

// 公開API - 主要エンジンクラス
pub use api::{create_console_dispatcher, create_memory_dispatcher, sum_directory};
pub use dispatcher::WorkDispatcher;
