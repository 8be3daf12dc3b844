// 結果出力機能
// ファイルごとの結果行と最終合計の報告

pub mod implementations;

// 公開API
pub use implementations::{format_file_line, ConsoleReporter, MemoryReporter, NoOpReporter};
