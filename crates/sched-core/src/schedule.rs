//! 排程結果模型（機台時間表與訂單罰金）

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 機台上的一段占用時間
///
/// `position` 是訂單在本次排程序列中的位置，時間以工時分鐘表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub position: usize,
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(position: usize, start: i64, end: i64) -> Self {
        Self {
            position,
            start,
            end,
        }
    }

    /// 區間長度（分鐘）
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// 機台
///
/// 區間依開始時間排列且互不重疊。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    intervals: Vec<Interval>,
}

impl Machine {
    /// 創建閒置機台
    pub fn new() -> Self {
        Self::default()
    }

    /// 機台下一次可開工的時間
    pub fn available_at(&self) -> i64 {
        self.intervals.last().map_or(0, |last| last.end)
    }

    /// 已排入的區間
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// 排入一段加工
    ///
    /// 上一段屬於同一訂單且首尾相接時直接延長，否則新增一段。
    /// 呼叫端保證 `start >= available_at()`。
    pub fn assign(&mut self, position: usize, start: i64, end: i64) {
        debug_assert!(start >= self.available_at());

        match self.intervals.last_mut() {
            Some(last) if last.position == position && last.end == start => last.end = end,
            _ => self.intervals.push(Interval::new(position, start, end)),
        }
    }
}

/// 訂單罰金
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
    /// 訂單在排程序列中的位置
    pub position: usize,

    /// 罰金金額（不小於 0）
    pub amount: Decimal,

    /// 完工的工時分鐘
    pub finish_minute: i64,

    /// 完工時間
    pub finished_at: NaiveDateTime,
}

/// 一次排程模擬的完整結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// 排程序列：第 i 位是原始輸入中的訂單索引
    pub sequence: Vec<usize>,

    /// 各工序的機台
    pub stages: Vec<Vec<Machine>>,

    /// 各位置的罰金
    pub penalties: Vec<Penalty>,
}

impl Schedule {
    /// 空排程
    pub fn empty() -> Self {
        Self {
            sequence: Vec::new(),
            stages: Vec::new(),
            penalties: Vec::new(),
        }
    }

    /// 罰金總額
    pub fn total_penalty(&self) -> Decimal {
        self.penalties.iter().map(|p| p.amount).sum()
    }

    /// 原始輸入索引對應的排程位置
    pub fn position_of(&self, input_index: usize) -> Option<usize> {
        self.sequence.iter().position(|&i| i == input_index)
    }

    /// 某位置訂單的最早開工與最晚完工（工時分鐘）
    pub fn span_of(&self, position: usize) -> Option<(i64, i64)> {
        self.stages
            .iter()
            .flatten()
            .flat_map(|m| m.intervals())
            .filter(|iv| iv.position == position)
            .fold(None, |acc, iv| match acc {
                None => Some((iv.start, iv.end)),
                Some((s, e)) => Some((s.min(iv.start), e.max(iv.end))),
            })
    }

    /// 某位置訂單的罰金
    pub fn penalty_at(&self, position: usize) -> Option<&Penalty> {
        self.penalties.iter().find(|p| p.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_assign_appends() {
        let mut machine = Machine::new();
        assert_eq!(machine.available_at(), 0);

        machine.assign(0, 0, 5);
        machine.assign(1, 5, 10);

        assert_eq!(machine.intervals().len(), 2);
        assert_eq!(machine.available_at(), 10);
    }

    #[test]
    fn test_machine_assign_coalesces_same_order() {
        let mut machine = Machine::new();
        machine.assign(0, 0, 5);
        machine.assign(0, 5, 10);

        assert_eq!(machine.intervals(), &[Interval::new(0, 0, 10)]);
    }

    #[test]
    fn test_machine_assign_keeps_gap() {
        let mut machine = Machine::new();
        machine.assign(0, 0, 5);
        machine.assign(0, 8, 13);

        assert_eq!(
            machine.intervals(),
            &[Interval::new(0, 0, 5), Interval::new(0, 8, 13)]
        );
        assert_eq!(machine.available_at(), 13);
    }

    #[test]
    fn test_schedule_span() {
        let mut first = Machine::new();
        first.assign(0, 0, 5);
        first.assign(1, 5, 10);
        let mut second = Machine::new();
        second.assign(0, 5, 15);

        let schedule = Schedule {
            sequence: vec![1, 0],
            stages: vec![vec![first], vec![second]],
            penalties: Vec::new(),
        };

        assert_eq!(schedule.span_of(0), Some((0, 15)));
        assert_eq!(schedule.span_of(1), Some((5, 10)));
        assert_eq!(schedule.span_of(2), None);
        assert_eq!(schedule.position_of(0), Some(1));
    }
}
