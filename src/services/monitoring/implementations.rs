// 結果出力の具象実装

use crate::core::{FileOutcome, Number, ResultReporter};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/// 1ファイル分の出力行を組み立てる（`<filename>: <number>` / `<filename>: no number`）
pub fn format_file_line(file_name: &str, outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Number(value) => format!("{file_name}: {value}"),
        FileOutcome::NoNumber { .. } | FileOutcome::Skipped => {
            format!("{file_name}: no number")
        }
    }
}

/// 標準出力への結果報告実装
///
/// 行単位でstdoutをロックして書き出すため、並行タスクの出力が行の途中で混ざらない。
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    fn write_line(line: &str) {
        let mut stdout = std::io::stdout().lock();
        // パイプが閉じられた場合などは出力を諦めて処理を継続
        if let Err(error) = writeln!(stdout, "{line}") {
            tracing::warn!(%error, "failed to write to stdout");
        }
    }
}

impl ResultReporter for ConsoleReporter {
    fn report_file(&self, file_name: &str, outcome: &FileOutcome) {
        if outcome.is_reported() {
            Self::write_line(&format_file_line(file_name, outcome));
        }
    }

    fn report_total(&self, total: Number) {
        Self::write_line(&total.to_string());
    }
}

/// 何もしない結果報告実装（ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ResultReporter for NoOpReporter {
    fn report_file(&self, _file_name: &str, _outcome: &FileOutcome) {
        // 何もしない
    }

    fn report_total(&self, _total: Number) {
        // 何もしない
    }
}

/// メモリ内に出力行を保持する実装（テスト用および組み込み用）
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    lines: Arc<Mutex<Vec<String>>>,
    totals: Arc<Mutex<Vec<Number>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 報告されたファイル行（報告順）
    pub fn lines(&self) -> Vec<String> {
        Self::lock(&self.lines).clone()
    }

    /// 報告された行をソートして取得（並行実行の順序に依存しない比較用）
    pub fn sorted_lines(&self) -> Vec<String> {
        let mut lines = self.lines();
        lines.sort();
        lines
    }

    /// 報告された合計値
    pub fn totals(&self) -> Vec<Number> {
        Self::lock(&self.totals).clone()
    }
}

impl ResultReporter for MemoryReporter {
    fn report_file(&self, file_name: &str, outcome: &FileOutcome) {
        if outcome.is_reported() {
            Self::lock(&self.lines).push(format_file_line(file_name, outcome));
        }
    }

    fn report_total(&self, total: Number) {
        Self::lock(&self.totals).push(total);
    }
}
