// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとアプリケーションロジックの橋渡し

pub mod args;
pub mod logging;
pub mod scan;

// 公開API
pub use args::{is_unexpected_argument, validate_root, Cli};
pub use logging::setup_logging;
pub use scan::{execute_scan, ARGUMENT_ERROR_MESSAGE};
