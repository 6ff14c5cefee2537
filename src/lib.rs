//! # Order Scheduler
//!
//! 多工序生產線的訂單排程：讀入訂單，搜尋罰金最低的生產序列，輸出訂單彙總與機台工作表。
//!
//! ## 範例
//!
//! ```no_run
//! use order_scheduler::{input, plan_orders, SchedulerConfig};
//!
//! let config = SchedulerConfig::default();
//! let orders = input::read_orders("orders.csv", config.deadline_year).unwrap();
//! let plan = plan_orders(&orders, &config).unwrap();
//! println!("罰金總額: {}", plan.result.best_penalty);
//! ```

pub mod input;
pub mod logging;

// Re-export 各子 crate
pub use sched_calc::{PenaltyCalculator, PieceRoute, Simulation, Simulator, StageVisit};
pub use sched_core::*;
pub use sched_optimizer::{OptimizationResult, SequenceOptimizer, SlackOrdering};
pub use sched_report::{
    render_order_summary, render_work_schedule, write_order_summary, write_work_schedule,
    OrderSummary, ScheduleReporter, WorkEntry,
};

/// 一次完整排程的產出
#[derive(Debug, Clone)]
pub struct SchedulePlan {
    /// 最佳化結果
    pub result: OptimizationResult,

    /// 訂單彙總（原始輸入順序）
    pub order_summary: Vec<OrderSummary>,

    /// 機台逐日工作表
    pub work_schedule: Vec<WorkEntry>,
}

impl SchedulePlan {
    /// 兩份報表的 CSV 內容：（訂單彙總, 工作表）
    pub fn render(&self) -> csv::Result<(Vec<u8>, Vec<u8>)> {
        Ok((
            render_order_summary(&self.order_summary)?,
            render_work_schedule(&self.work_schedule)?,
        ))
    }
}

/// 最佳化訂單序列並產生報表
pub fn plan_orders(orders: &[Order], config: &SchedulerConfig) -> Result<SchedulePlan> {
    let result = SequenceOptimizer::new(config).optimize(orders)?;

    let reporter = ScheduleReporter::new(orders, &result.schedule, config);
    let order_summary = reporter.order_summary()?;
    let work_schedule = reporter.work_schedule()?;

    Ok(SchedulePlan {
        result,
        order_summary,
        work_schedule,
    })
}
