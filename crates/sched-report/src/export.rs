//! CSV 輸出

use serde::Serialize;
use std::io;

use crate::{OrderSummary, WorkEntry};

const SUMMARY_TIME_FORMAT: &str = "%m.%d %H:%M";
const WORK_DATE_FORMAT: &str = "%Y.%m.%d.";
const WORK_TIME_FORMAT: &str = "%H:%M";

#[derive(Serialize)]
struct OrderSummaryRecord<'a> {
    #[serde(rename = "Order")]
    order_id: &'a str,
    #[serde(rename = "Net profit")]
    net_profit: String,
    #[serde(rename = "Penalty")]
    penalty: String,
    #[serde(rename = "Work start")]
    work_start: String,
    #[serde(rename = "Ready")]
    ready_at: String,
    #[serde(rename = "Deadline")]
    deadline: String,
}

impl<'a> From<&'a OrderSummary> for OrderSummaryRecord<'a> {
    fn from(row: &'a OrderSummary) -> Self {
        Self {
            order_id: &row.order_id,
            net_profit: row.net_profit.to_string(),
            penalty: row.penalty.to_string(),
            work_start: row.work_start.format(SUMMARY_TIME_FORMAT).to_string(),
            ready_at: row.ready_at.format(SUMMARY_TIME_FORMAT).to_string(),
            deadline: row.deadline.format(SUMMARY_TIME_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize)]
struct WorkRecord<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Machine")]
    machine: &'a str,
    #[serde(rename = "Start")]
    start: String,
    #[serde(rename = "End")]
    end: String,
    #[serde(rename = "Order")]
    order_id: &'a str,
}

impl<'a> From<&'a WorkEntry> for WorkRecord<'a> {
    fn from(row: &'a WorkEntry) -> Self {
        Self {
            date: row.date.format(WORK_DATE_FORMAT).to_string(),
            machine: &row.machine_label,
            start: row.start.format(WORK_TIME_FORMAT).to_string(),
            end: row.end.format(WORK_TIME_FORMAT).to_string(),
            order_id: &row.order_id,
        }
    }
}

/// 寫出訂單彙總 CSV
pub fn write_order_summary<W: io::Write>(rows: &[OrderSummary], writer: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(OrderSummaryRecord::from(row))?;
    }
    if rows.is_empty() {
        writer.write_record(["Order", "Net profit", "Penalty", "Work start", "Ready", "Deadline"])?;
    }
    writer.flush()?;
    Ok(())
}

/// 寫出工作表 CSV
pub fn write_work_schedule<W: io::Write>(rows: &[WorkEntry], writer: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(WorkRecord::from(row))?;
    }
    if rows.is_empty() {
        writer.write_record(["Date", "Machine", "Start", "End", "Order"])?;
    }
    writer.flush()?;
    Ok(())
}

/// 將訂單彙總輸出為 CSV 內容
pub fn render_order_summary(rows: &[OrderSummary]) -> csv::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_order_summary(rows, &mut buffer)?;
    Ok(buffer)
}

/// 將工作表輸出為 CSV 內容
pub fn render_work_schedule(rows: &[WorkEntry]) -> csv::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_work_schedule(rows, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 7, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_render_order_summary() {
        let rows = vec![OrderSummary {
            order_id: "MEGR-001".to_string(),
            net_profit: Decimal::from(-500),
            penalty: Decimal::from(2500),
            work_start: at(20, 6, 0),
            ready_at: at(21, 22, 0),
            deadline: at(21, 12, 30),
        }];

        let text = String::from_utf8(render_order_summary(&rows).unwrap()).unwrap();

        assert_eq!(
            text,
            "Order,Net profit,Penalty,Work start,Ready,Deadline\n\
             MEGR-001,-500,2500,07.20 06:00,07.21 22:00,07.21 12:30\n"
        );
    }

    #[test]
    fn test_render_work_schedule() {
        let rows = vec![WorkEntry {
            date: NaiveDate::from_ymd_opt(2020, 7, 21).unwrap(),
            stage: 3,
            machine: 0,
            machine_label: "Testing-1".to_string(),
            start: at(21, 6, 0),
            end: at(21, 6, 45),
            order_id: "MEGR-002".to_string(),
        }];

        let text = String::from_utf8(render_work_schedule(&rows).unwrap()).unwrap();

        assert_eq!(
            text,
            "Date,Machine,Start,End,Order\n2020.07.21.,Testing-1,06:00,06:45,MEGR-002\n"
        );
    }

    #[test]
    fn test_empty_reports_keep_header() {
        let summary = String::from_utf8(render_order_summary(&[]).unwrap()).unwrap();
        let work = String::from_utf8(render_work_schedule(&[]).unwrap()).unwrap();

        assert_eq!(summary, "Order,Net profit,Penalty,Work start,Ready,Deadline\n");
        assert_eq!(work, "Date,Machine,Start,End,Order\n");
    }
}
