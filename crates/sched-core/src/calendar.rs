//! 班次日曆模型
//!
//! 排程內部以「自起始日 0 分起算的有效工時分鐘」表示時間，
//! 每天只有一個固定長度的班次（預設 06:00–22:00）。

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{Result, SchedulerError};

/// 分鐘換算為日期時，時間點屬於區間的開始還是結束
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// 開始時間：剛好落在班次交界時算作下一天開工
    Start,
    /// 結束時間：剛好落在班次交界時算作前一天收工
    End,
}

/// 班次日曆
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCalendar {
    /// 排程起始日（第 0 分鐘所在的日期）
    pub epoch: NaiveDate,

    /// 每日開工時刻（小時）
    pub shift_start_hour: u32,

    /// 每日班次長度（分鐘）
    pub shift_minutes: u32,
}

impl ShiftCalendar {
    /// 創建新的班次日曆
    pub fn new(epoch: NaiveDate, shift_start_hour: u32, shift_minutes: u32) -> Self {
        Self {
            epoch,
            shift_start_hour,
            shift_minutes,
        }
    }

    /// 建構器模式：設置起始日
    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    /// 建構器模式：設置班次
    pub fn with_shift(mut self, start_hour: u32, minutes: u32) -> Self {
        self.shift_start_hour = start_hour;
        self.shift_minutes = minutes;
        self
    }

    /// 班次長度（分鐘）
    pub fn shift_len(&self) -> i64 {
        i64::from(self.shift_minutes)
    }

    /// 第 `day` 天班次結束時的工時分鐘
    pub fn day_end(&self, day: i64) -> i64 {
        (day + 1) * self.shift_len()
    }

    /// 工時分鐘所在的日序（由 0 起算）
    pub fn day_of(&self, minutes: i64) -> i64 {
        minutes.div_euclid(self.shift_len())
    }

    /// 第 `day` 天的日期
    pub fn date_of(&self, day: i64) -> NaiveDate {
        self.epoch + Duration::days(day)
    }

    /// 將工時分鐘換算為日期時間
    ///
    /// 結束時間若剛好落在某天開工時刻（且不是第 0 分鐘），
    /// 改報為前一天的收工時刻。
    pub fn to_datetime(&self, minutes: i64, boundary: Boundary) -> NaiveDateTime {
        let shift = self.shift_len();
        let mut day = minutes.div_euclid(shift);
        let mut offset = minutes.rem_euclid(shift);

        if boundary == Boundary::End && minutes != 0 && offset == 0 {
            day -= 1;
            offset = shift;
        }

        self.date_of(day).and_time(NaiveTime::MIN)
            + Duration::hours(i64::from(self.shift_start_hour))
            + Duration::minutes(offset)
    }

    /// 檢查班次設定
    pub fn validate(&self) -> Result<()> {
        if self.shift_minutes == 0 {
            return Err(SchedulerError::Config("班次長度必須大於 0".to_string()));
        }
        if self.shift_start_hour * 60 + self.shift_minutes > 24 * 60 {
            return Err(SchedulerError::Config(format!(
                "班次 {} 時起 {} 分鐘超過當日午夜",
                self.shift_start_hour, self.shift_minutes
            )));
        }
        Ok(())
    }
}

impl Default for ShiftCalendar {
    fn default() -> Self {
        Self::new(
            NaiveDate::from_ymd_opt(2020, 7, 20).unwrap_or_default(),
            6,
            16 * 60,
        )
    }
}
