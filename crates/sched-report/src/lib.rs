//! # Schedule Reporter
//!
//! 排程報表：訂單彙總與機台逐日工作表，以及 CSV 輸出

pub mod export;
pub mod order_summary;
pub mod work_schedule;

// Re-export 主要類型
pub use export::{render_order_summary, render_work_schedule, write_order_summary, write_work_schedule};
pub use order_summary::OrderSummary;
pub use work_schedule::WorkEntry;

use sched_core::{Order, Schedule, SchedulerConfig};

/// 排程報表產生器
pub struct ScheduleReporter<'a> {
    orders: &'a [Order],
    schedule: &'a Schedule,
    config: &'a SchedulerConfig,
}

impl<'a> ScheduleReporter<'a> {
    /// 創建報表產生器
    ///
    /// `orders` 為原始輸入順序，`schedule.sequence` 以其索引描述排程序列。
    pub fn new(orders: &'a [Order], schedule: &'a Schedule, config: &'a SchedulerConfig) -> Self {
        Self {
            orders,
            schedule,
            config,
        }
    }

    /// 訂單彙總（依原始輸入順序）
    pub fn order_summary(&self) -> sched_core::Result<Vec<OrderSummary>> {
        order_summary::build(self.orders, self.schedule, &self.config.calendar)
    }

    /// 機台逐日工作表
    pub fn work_schedule(&self) -> sched_core::Result<Vec<WorkEntry>> {
        work_schedule::build(self.orders, self.schedule, self.config)
    }
}
