//! 日誌初始化
//!
//! 各 crate 的日誌目標：
//! - `order_scheduler`：讀檔、寫檔與整體結果（info）
//! - `sched_optimizer`：初始序列、每次改善（debug）、相鄰交換（trace）
//! - `sched_calc`：每次模擬的罰金總額（trace）
//! - `sched_report`：工作表列數（debug）
//!
//! 未設定 `RUST_LOG` 時只輸出 info。觀察搜尋過程可用
//! `RUST_LOG=info,sched_optimizer=debug`。日誌寫到 stderr，報表檔不受影響。

use tracing_subscriber::{fmt, EnvFilter};

/// 未設定 `RUST_LOG` 時的過濾條件
const DEFAULT_FILTER: &str = "info";

/// 測試時的過濾條件：排程各 crate 開到 debug，其餘維持 info
const TEST_FILTER: &str = "info,order_scheduler=debug,sched_optimizer=debug,sched_calc=debug,sched_report=debug";

/// 初始化日誌系統
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 測試用日誌，可重複呼叫
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_FILTER))
        .with_test_writer()
        .try_init();
}
