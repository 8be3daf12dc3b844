use anyhow::{Context, Result};
use clap::Parser;
use dir_sum::cli::{
    execute_scan, is_unexpected_argument, setup_logging, Cli, ARGUMENT_ERROR_MESSAGE,
};
use dir_sum::core::SumError;
use std::process::ExitCode;

/// 引数エラー時の終了コード（clapの使用法エラーと揃える）
const ARGUMENT_ERROR_EXIT_CODE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // 引数の個数が合わない場合もパス不正と同じ扱い
        Err(error) if is_unexpected_argument(&error) => return argument_error(),
        Err(error) => error.exit(),
    };

    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{:#}", error);
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    setup_logging(cli.verbose).context("Failed to initialize logging")?;

    match execute_scan(&cli).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(error @ SumError::ArgumentError { .. }) => {
            tracing::debug!(%error, "rejecting scan root");
            Ok(argument_error())
        }
        Err(error) => Err(error).context("Scan failed"),
    }
}

fn argument_error() -> ExitCode {
    println!("{ARGUMENT_ERROR_MESSAGE}");
    ExitCode::from(ARGUMENT_ERROR_EXIT_CODE)
}
