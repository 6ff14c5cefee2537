//! 初始序列：依單獨生產時的交期餘裕排序

use chrono::Duration;
use rayon::prelude::*;
use sched_calc::{PenaltyCalculator, Simulator};
use sched_core::Order;

/// 交期餘裕排序
pub struct SlackOrdering;

impl SlackOrdering {
    /// 每張訂單單獨生產時的交期餘裕，順序與輸入一致
    pub fn solo_slacks(simulator: &Simulator<'_>, orders: &[Order]) -> sched_core::Result<Vec<Duration>> {
        orders
            .par_iter()
            .map(|order| {
                let simulation = simulator.simulate(&[order])?;
                Ok(PenaltyCalculator::slack(
                    order,
                    simulation.penalties[0].finished_at,
                ))
            })
            .collect()
    }

    /// 初始序列：餘裕大的在前，最緊急的在最後；餘裕相同時保留輸入順序
    pub fn initial_sequence(simulator: &Simulator<'_>, orders: &[Order]) -> sched_core::Result<Vec<usize>> {
        let slacks = Self::solo_slacks(simulator, orders)?;

        let mut sequence: Vec<usize> = (0..orders.len()).collect();
        sequence.sort_by(|&a, &b| slacks[b].cmp(&slacks[a]));

        tracing::debug!("初始序列: {:?}", sequence);
        Ok(sequence)
    }
}
