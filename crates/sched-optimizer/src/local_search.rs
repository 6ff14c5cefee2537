//! 相鄰交換局部搜尋
//!
//! 每輪模擬目前序列後，取第 `fixed_count + 1` 高罰金的訂單，
//! 若它前一位的罰金較低，就把兩者交換，讓高罰金訂單提前一格。
//! 有改善時 `fixed_count` 歸零，否則往下一個高罰金訂單嘗試；
//! `fixed_count` 到達訂單數減一時停止。

use rust_decimal::Decimal;
use sched_calc::Simulator;
use sched_core::{Order, Schedule, SchedulerConfig};

use crate::{OptimizationResult, SlackOrdering};

/// 訂單序列最佳化器
pub struct SequenceOptimizer<'a> {
    config: &'a SchedulerConfig,
}

impl<'a> SequenceOptimizer<'a> {
    /// 創建新的最佳化器
    pub fn new(config: &'a SchedulerConfig) -> Self {
        Self { config }
    }

    /// 搜尋罰金總額最低的訂單序列
    pub fn optimize(&self, orders: &[Order]) -> sched_core::Result<OptimizationResult> {
        self.config.validate()?;
        for order in orders {
            order.validate()?;
        }

        tracing::info!("開始排程最佳化：訂單 {} 筆", orders.len());
        let start_time = std::time::Instant::now();

        if orders.is_empty() {
            return Ok(OptimizationResult::empty());
        }

        let simulator = Simulator::new(self.config);
        let mut sequence = SlackOrdering::initial_sequence(&simulator, orders)?;

        let fixed_limit = orders.len() - 1;
        let mut fixed_count = 0;
        let mut iterations = 0;
        let mut best_penalty: Option<Decimal> = None;
        let mut best_schedule = Schedule::empty();
        let mut improvements = Vec::new();

        loop {
            iterations += 1;

            let batch: Vec<&Order> = sequence.iter().map(|&index| &orders[index]).collect();
            let simulation = simulator.simulate(&batch)?;
            let total = simulation.total_penalty();
            let amounts: Vec<Decimal> = simulation.penalties.iter().map(|p| p.amount).collect();

            if best_penalty.map_or(true, |best| total < best) {
                tracing::debug!("第 {} 輪找到更佳序列，罰金總額 {}", iterations, total);
                best_penalty = Some(total);
                best_schedule = simulation.into_schedule(sequence.clone());
                improvements.push(total);
                fixed_count = 0;
            } else {
                fixed_count += 1;
            }

            if fixed_count >= fixed_limit {
                break;
            }

            let ranking = Self::rank_by_penalty(&amounts);
            let target = ranking[fixed_count];
            if target != 0 && amounts[target - 1] < amounts[target] {
                tracing::trace!("交換位置 {} 與 {}", target - 1, target);
                sequence.swap(target - 1, target);
            }
        }

        let best_penalty = best_penalty.unwrap_or(Decimal::ZERO);
        tracing::info!(
            "排程最佳化完成：罰金總額 {}，模擬 {} 次，耗時 {:?}",
            best_penalty,
            iterations,
            start_time.elapsed()
        );

        Ok(OptimizationResult {
            schedule: best_schedule,
            best_penalty,
            iterations,
            improvements,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        })
    }

    /// 依罰金由高到低排列的位置；罰金相同時位置小的在前
    fn rank_by_penalty(amounts: &[Decimal]) -> Vec<usize> {
        let mut ranking: Vec<usize> = (0..amounts.len()).collect();
        ranking.sort_by(|&a, &b| amounts[b].cmp(&amounts[a]));
        ranking
    }
}
