//! 延遲罰金計算

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use sched_core::{Boundary, Order, Penalty, ShiftCalendar};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// 罰金計算器
pub struct PenaltyCalculator;

impl PenaltyCalculator {
    /// 依完工分鐘計算訂單罰金
    pub fn assess(
        position: usize,
        order: &Order,
        finish_minute: i64,
        calendar: &ShiftCalendar,
    ) -> Penalty {
        let finished_at = calendar.to_datetime(finish_minute, Boundary::End);
        let days = Self::days_late(finished_at, order.deadline);

        let amount = if days > 0 {
            Decimal::from(days) * order.penalty_per_day
        } else {
            Decimal::ZERO
        };

        Penalty {
            position,
            amount: amount.max(Decimal::ZERO),
            finish_minute,
            finished_at,
        }
    }

    /// 延遲天數，不足一天以一天計；提前完工為 0 或負數
    pub fn days_late(finished_at: NaiveDateTime, deadline: NaiveDateTime) -> i64 {
        let seconds = (finished_at - deadline).num_seconds();
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        if seconds.rem_euclid(SECONDS_PER_DAY) != 0 {
            days + 1
        } else {
            days
        }
    }

    /// 交期餘裕：交期減去完工時間（可為負）
    pub fn slack(order: &Order, finished_at: NaiveDateTime) -> Duration {
        order.deadline - finished_at
    }
}
