//! # Sequence Optimizer
//!
//! 訂單序列最佳化：依交期餘裕排出初始序列，再以相鄰交換的局部搜尋降低罰金總額

pub mod local_search;
pub mod slack;

// Re-export 主要類型
pub use local_search::SequenceOptimizer;
pub use slack::SlackOrdering;

use rust_decimal::Decimal;
use sched_core::Schedule;

/// 最佳化結果
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// 找到的最佳排程（含產生它的訂單序列）
    pub schedule: Schedule,

    /// 最佳排程的罰金總額
    pub best_penalty: Decimal,

    /// 模擬次數
    pub iterations: usize,

    /// 每次改善時的罰金總額（依發生順序）
    pub improvements: Vec<Decimal>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl OptimizationResult {
    /// 沒有訂單時的結果
    pub fn empty() -> Self {
        Self {
            schedule: Schedule::empty(),
            best_penalty: Decimal::ZERO,
            iterations: 0,
            improvements: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 最佳序列（原始輸入索引）
    pub fn best_sequence(&self) -> &[usize] {
        &self.schedule.sequence
    }
}
