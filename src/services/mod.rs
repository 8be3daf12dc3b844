// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod accumulator;
pub mod config;
pub mod monitoring;
pub mod processing;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use accumulator::SharedAccumulator;
pub use config::{default_pool_size, validate_config, DefaultScanConfig};
pub use monitoring::{format_file_line, ConsoleReporter, MemoryReporter, NoOpReporter};
pub use processing::{parse_number, process_single_file};
