// ファイル処理機能
// 単一ファイルの読み込み、整数解析、結果報告、累積器への加算

pub mod parser;
pub mod worker;

// 公開API
pub use parser::parse_number;
pub use worker::process_single_file;
