//! 訂單輸入檔解析
//!
//! CSV 第一列為表頭，欄位依序為：訂單編號、產品、件數、交期、單件利潤、每日罰金。
//! 交期只有「月.日 時:分」或「月.日」，年份由配置提供。

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use sched_core::{Order, Product};
use std::io;
use std::path::Path;
use std::str::FromStr;

/// 輸入檔錯誤
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("無法開啟輸入檔 {path}: {source}")]
    Open { path: String, source: csv::Error },

    #[error("CSV 解析失敗 (行 {row}): {source}")]
    Csv { row: usize, source: csv::Error },

    #[error("欄位缺失 (行 {row}): {field}")]
    MissingField { row: usize, field: &'static str },

    #[error("欄位格式錯誤 (行 {row}, 欄位 {field}): {value}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
}

const FIELDS: [&str; 6] = [
    "id",
    "product",
    "quantity",
    "deadline",
    "profit_per_piece",
    "penalty_per_day",
];

/// 從檔案讀取訂單
pub fn read_orders(path: impl AsRef<Path>, deadline_year: i32) -> Result<Vec<Order>, InputError> {
    let path = path.as_ref();
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| InputError::Open {
            path: path.display().to_string(),
            source,
        })?;

    let orders = parse_records(reader, deadline_year)?;
    tracing::info!("從 {} 讀取訂單 {} 筆", path.display(), orders.len());
    Ok(orders)
}

/// 從任意來源解析訂單
pub fn parse_orders<R: io::Read>(source: R, deadline_year: i32) -> Result<Vec<Order>, InputError> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);
    parse_records(reader, deadline_year)
}

fn parse_records<R: io::Read>(
    mut reader: csv::Reader<R>,
    deadline_year: i32,
) -> Result<Vec<Order>, InputError> {
    let mut orders = Vec::new();

    for (index, result) in reader.records().enumerate() {
        // 表頭是第 1 行
        let row = index + 2;
        let record = result.map_err(|source| InputError::Csv { row, source })?;

        // 跳過完全空白的行
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        orders.push(parse_order(&record, row, deadline_year)?);
    }

    Ok(orders)
}

fn parse_order(record: &StringRecord, row: usize, deadline_year: i32) -> Result<Order, InputError> {
    let field = |index: usize| required_field(record, row, index);
    let invalid = |index: usize, value: &str| InputError::InvalidField {
        row,
        field: FIELDS[index],
        value: value.to_string(),
    };

    let id = field(0)?.to_string();

    let product_code = field(1)?;
    let product = Product::from_str(product_code).map_err(|_| invalid(1, product_code))?;

    let quantity_text = field(2)?;
    let quantity = strip_spaces(quantity_text)
        .parse::<u32>()
        .map_err(|_| invalid(2, quantity_text))?;

    let deadline_text = field(3)?;
    let deadline =
        parse_deadline(deadline_text, deadline_year).ok_or_else(|| invalid(3, deadline_text))?;

    let profit_text = field(4)?;
    let profit_per_piece =
        Decimal::from_str(&strip_spaces(profit_text)).map_err(|_| invalid(4, profit_text))?;

    let penalty_text = field(5)?;
    let penalty_per_day =
        Decimal::from_str(&strip_spaces(penalty_text)).map_err(|_| invalid(5, penalty_text))?;

    Ok(Order::new(id, product, quantity, deadline)
        .with_profit_per_piece(profit_per_piece)
        .with_penalty_per_day(penalty_per_day))
}

fn required_field(record: &StringRecord, row: usize, index: usize) -> Result<&str, InputError> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .ok_or(InputError::MissingField {
            row,
            field: FIELDS[index],
        })
}

/// 去除數字中的千分位空白，例如 `1 000`
fn strip_spaces(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// 解析交期：`MM.dd HH:mm`、`MM.dd HH:mm:ss` 或 `MM.dd`
fn parse_deadline(value: &str, year: i32) -> Option<NaiveDateTime> {
    let text = format!("{}.{}", year, value.trim().trim_end_matches('.'));

    ["%Y.%m.%d %H:%M", "%Y.%m.%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&text, "%Y.%m.%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
