//! 排程配置模型

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{ProductCatalog, Result, SchedulerError, ShiftCalendar};

/// 排程參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// 產品目錄（機台數量與加工時間）
    pub catalog: ProductCatalog,

    /// 班次日曆
    pub calendar: ShiftCalendar,

    /// 輸入檔交期所屬年份（輸入只有月、日、時分）
    pub deadline_year: i32,
}

impl SchedulerConfig {
    /// 創建新的排程配置
    pub fn new(catalog: ProductCatalog, calendar: ShiftCalendar) -> Self {
        let deadline_year = chrono::Datelike::year(&calendar.epoch);
        Self {
            catalog,
            calendar,
            deadline_year,
        }
    }

    /// 建構器模式：設置產品目錄
    pub fn with_catalog(mut self, catalog: ProductCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// 建構器模式：設置班次日曆
    pub fn with_calendar(mut self, calendar: ShiftCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// 建構器模式：設置交期年份
    pub fn with_deadline_year(mut self, year: i32) -> Self {
        self.deadline_year = year;
        self
    }

    /// 從 JSON 檔載入配置，缺少的欄位使用預設值
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchedulerError::Config(format!("無法讀取 {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| SchedulerError::Config(format!("無法解析 {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查配置是否可用於排程
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.calendar.validate()
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new(ProductCatalog::standard(), ShiftCalendar::default())
    }
}
