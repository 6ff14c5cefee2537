//! 訂單彙總報表

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sched_core::{Boundary, Order, Schedule, SchedulerError, ShiftCalendar};
use serde::Serialize;

/// 單張訂單的彙總
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// 訂單編號
    pub order_id: String,

    /// 淨利潤（總利潤扣除罰金）
    pub net_profit: Decimal,

    /// 罰金
    pub penalty: Decimal,

    /// 開工時間（所有工序中最早的開始）
    pub work_start: NaiveDateTime,

    /// 完工時間（所有工序中最晚的結束）
    pub ready_at: NaiveDateTime,

    /// 原始交期
    pub deadline: NaiveDateTime,
}

/// 依原始輸入順序產生訂單彙總
pub(crate) fn build(
    orders: &[Order],
    schedule: &Schedule,
    calendar: &ShiftCalendar,
) -> sched_core::Result<Vec<OrderSummary>> {
    orders
        .iter()
        .enumerate()
        .map(|(index, order)| {
            let missing = || SchedulerError::MissingFromSchedule(order.id.clone());

            let position = schedule.position_of(index).ok_or_else(missing)?;
            let (start, end) = schedule.span_of(position).ok_or_else(missing)?;
            let penalty = schedule.penalty_at(position).ok_or_else(missing)?;

            Ok(OrderSummary {
                order_id: order.id.clone(),
                net_profit: order.gross_profit() - penalty.amount,
                penalty: penalty.amount,
                work_start: calendar.to_datetime(start, Boundary::Start),
                ready_at: calendar.to_datetime(end, Boundary::End),
                deadline: order.deadline,
            })
        })
        .collect()
}
