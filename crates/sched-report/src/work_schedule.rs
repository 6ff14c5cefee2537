//! 機台逐日工作表
//!
//! 跨越班次交界的區間在交界處拆成兩段，各自列在所屬的日期下。

use chrono::{NaiveDate, NaiveDateTime};
use sched_core::{Boundary, Order, Schedule, SchedulerConfig, SchedulerError, ShiftCalendar};
use serde::Serialize;

/// 工作表中的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkEntry {
    /// 工作日期
    pub date: NaiveDate,

    /// 工序索引
    pub stage: usize,

    /// 工序內的機台索引（由 0 起算）
    pub machine: usize,

    /// 機台標籤，例如 `Cutting-1`
    pub machine_label: String,

    /// 開始時間
    pub start: NaiveDateTime,

    /// 結束時間
    pub end: NaiveDateTime,

    /// 訂單編號
    pub order_id: String,
}

/// 產生工作表：依日期、工序、機台、開始時間排列
pub(crate) fn build(
    orders: &[Order],
    schedule: &Schedule,
    config: &SchedulerConfig,
) -> sched_core::Result<Vec<WorkEntry>> {
    let calendar = &config.calendar;
    let mut keyed = Vec::new();

    for (stage, machines) in schedule.stages.iter().enumerate() {
        let stage_name = config.catalog.stage_name(stage);

        for (machine, intervals) in machines.iter().map(|m| m.intervals()).enumerate() {
            let machine_label = format!("{}-{}", stage_name, machine + 1);

            for interval in intervals {
                let order = schedule
                    .sequence
                    .get(interval.position)
                    .and_then(|&index| orders.get(index))
                    .ok_or_else(|| {
                        SchedulerError::MissingFromSchedule(format!("位置 {}", interval.position))
                    })?;

                for (start, end) in split_by_day(interval.start, interval.end, calendar) {
                    let day = calendar.day_of(start);
                    let entry = WorkEntry {
                        date: calendar.date_of(day),
                        stage,
                        machine,
                        machine_label: machine_label.clone(),
                        start: calendar.to_datetime(start, Boundary::Start),
                        end: calendar.to_datetime(end, Boundary::End),
                        order_id: order.id.clone(),
                    };
                    keyed.push(((day, stage, machine, start), entry));
                }
            }
        }
    }

    keyed.sort_by_key(|(key, _)| *key);
    tracing::debug!("工作表共 {} 列", keyed.len());

    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

/// 依班次交界拆分區間
fn split_by_day(start: i64, end: i64, calendar: &ShiftCalendar) -> Vec<(i64, i64)> {
    let mut parts = Vec::new();
    let mut cursor = start;

    loop {
        let part_end = end.min(calendar.day_end(calendar.day_of(cursor)));
        parts.push((cursor, part_end));
        if part_end >= end {
            break;
        }
        cursor = part_end;
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sched_core::{Machine, Product};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 7, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn order(id: &str) -> Order {
        Order::new(id, Product::Gyb, 1, at(31, 12, 0))
    }

    #[rstest]
    #[case(0, 50, vec![(0, 50)])]
    #[case(900, 960, vec![(900, 960)])]
    #[case(900, 1000, vec![(900, 960), (960, 1000)])]
    #[case(900, 2000, vec![(900, 960), (960, 1920), (1920, 2000)])]
    #[case(960, 960, vec![(960, 960)])]
    fn test_split_by_day(#[case] start: i64, #[case] end: i64, #[case] expected: Vec<(i64, i64)>) {
        assert_eq!(split_by_day(start, end, &ShiftCalendar::default()), expected);
    }

    #[test]
    fn test_split_by_day_follows_shift_length() {
        let calendar = ShiftCalendar::default().with_shift(8, 8 * 60);

        assert_eq!(
            split_by_day(400, 1000, &calendar),
            vec![(400, 480), (480, 960), (960, 1000)]
        );
    }

    #[test]
    fn test_interval_ending_on_boundary_stays_on_previous_day() {
        let config = SchedulerConfig::default();
        let orders = vec![order("A")];
        let mut machine = Machine::new();
        machine.assign(0, 900, 960);
        let schedule = Schedule {
            sequence: vec![0],
            stages: vec![vec![machine]],
            penalties: Vec::new(),
        };

        let rows = build(&orders, &schedule, &config).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2020, 7, 20).unwrap());
        assert_eq!(rows[0].start, at(20, 21, 0));
        assert_eq!(rows[0].end, at(20, 22, 0));
        assert_eq!(rows[0].machine_label, "Cutting-1");
    }

    #[test]
    fn test_interval_crossing_boundary_is_split() {
        let config = SchedulerConfig::default();
        let orders = vec![order("A")];
        let mut machine = Machine::new();
        machine.assign(0, 930, 1010);
        let schedule = Schedule {
            sequence: vec![0],
            stages: vec![vec![machine]],
            penalties: Vec::new(),
        };

        let rows = build(&orders, &schedule, &config).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].start, at(20, 21, 30));
        assert_eq!(rows[0].end, at(20, 22, 0));
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2020, 7, 21).unwrap());
        assert_eq!(rows[1].start, at(21, 6, 0));
        assert_eq!(rows[1].end, at(21, 6, 50));
    }

    #[test]
    fn test_rows_grouped_by_day_then_machine() {
        let config = SchedulerConfig::default();
        let orders = vec![order("A"), order("B")];

        let mut cutting_1 = Machine::new();
        cutting_1.assign(0, 0, 1000);
        let mut cutting_2 = Machine::new();
        cutting_2.assign(1, 10, 20);
        let mut bending_1 = Machine::new();
        bending_1.assign(1, 20, 40);
        let schedule = Schedule {
            sequence: vec![1, 0],
            stages: vec![vec![cutting_1, cutting_2], vec![bending_1]],
            penalties: Vec::new(),
        };

        let rows = build(&orders, &schedule, &config).unwrap();
        let labels: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.machine_label.as_str(), r.order_id.as_str()))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("Cutting-1", "B"),
                ("Cutting-2", "A"),
                ("Bending-1", "A"),
                ("Cutting-1", "B"),
            ]
        );
        assert_eq!(rows[3].date, NaiveDate::from_ymd_opt(2020, 7, 21).unwrap());
    }
}
