//! # Scheduler Core
//!
//! 核心資料模型與類型定義：訂單、產品目錄、班次日曆、排程結構

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod order;
pub mod schedule;

// Re-export 主要類型
pub use calendar::{Boundary, ShiftCalendar};
pub use catalog::{Product, ProductCatalog, StageSpec, STAGE_COUNT};
pub use config::SchedulerConfig;
pub use order::Order;
pub use schedule::{Interval, Machine, Penalty, Schedule};

/// 排程錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("未知的產品類型: {0}")]
    UnknownProduct(String),

    #[error("訂單 {order_id} 的數量必須大於 0")]
    NonPositiveQuantity { order_id: String },

    #[error("訂單 {order_id} 的每日罰金不可為負數")]
    NegativePenalty { order_id: String },

    #[error("工序 {stage} 沒有可用機台")]
    ZeroCapacity { stage: usize },

    #[error("產品目錄缺少加工時間: {0}")]
    MissingProcessingTimes(String),

    #[error("訂單 {order_id} 在工序 {stage} 找不到可用機台")]
    MachineUnavailable { order_id: String, stage: usize },

    #[error("排程結果缺少訂單: {0}")]
    MissingFromSchedule(String),

    #[error("配置錯誤: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
