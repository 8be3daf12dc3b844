// 共有累積器 - 全タスクが加算する唯一の共有状態

use crate::core::Number;
use tokio::sync::Mutex;

/// 並行加算に安全な合計値
///
/// 全ての更新はMutexで直列化されるため、加算が失われることはない。
/// オーバーフロー時はラップアラウンドする。
#[derive(Debug, Default)]
pub struct SharedAccumulator {
    total: Mutex<Number>,
}

impl SharedAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 排他的に加算
    pub async fn add(&self, delta: Number) {
        let mut total = self.total.lock().await;
        *total = total.wrapping_add(delta);
    }

    /// 現在の合計値を取得
    pub async fn read(&self) -> Number {
        *self.total.lock().await
    }
}
