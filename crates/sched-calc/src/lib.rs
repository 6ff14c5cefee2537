//! # Scheduling Calculation Engine
//!
//! 工序模擬引擎：把訂單序列展開為機台時間表並計算罰金

pub mod penalty;
pub mod simulator;

// Re-export 主要類型
pub use penalty::PenaltyCalculator;
pub use simulator::Simulator;

use rust_decimal::Decimal;
use sched_core::{Machine, Penalty, Schedule, STAGE_COUNT};
use serde::Serialize;

/// 一次模擬的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    /// 各工序的機台（含已排入的區間）
    pub stages: Vec<Vec<Machine>>,

    /// 各位置的罰金，索引與輸入序列一致
    pub penalties: Vec<Penalty>,
}

impl Simulation {
    /// 罰金總額
    pub fn total_penalty(&self) -> Decimal {
        self.penalties.iter().map(|p| p.amount).sum()
    }

    /// 轉為排程結果，`sequence[i]` 為第 i 位訂單的原始輸入索引
    pub fn into_schedule(self, sequence: Vec<usize>) -> Schedule {
        Schedule {
            sequence,
            stages: self.stages,
            penalties: self.penalties,
        }
    }
}

/// 單件在某工序的加工紀錄
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageVisit {
    pub machine: usize,
    pub start: i64,
    pub end: i64,
}

/// 單件經過全部工序的路徑
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceRoute {
    /// 訂單在序列中的位置
    pub position: usize,

    /// 訂單內的件號（由 0 起算）
    pub piece: u32,

    /// 各工序的加工紀錄
    pub stages: [StageVisit; STAGE_COUNT],
}
