use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// 詳細度フラグからログレベルを決定
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// stderrへの診断ログを初期化（stdoutは結果出力専用）
pub fn setup_logging(verbose: u8) -> Result<()> {
    let filter = EnvFilter::new(format!("dir_sum={},warn", log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
