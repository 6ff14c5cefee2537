//! 生產訂單模型

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Product, Result, SchedulerError};

/// 生產訂單
///
/// 解析後即不再變動；排程只會調整訂單的先後順序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// 訂單編號
    pub id: String,

    /// 產品類型
    pub product: Product,

    /// 件數
    pub quantity: u32,

    /// 交期
    pub deadline: NaiveDateTime,

    /// 單件利潤
    pub profit_per_piece: Decimal,

    /// 每延遲一天的罰金
    pub penalty_per_day: Decimal,
}

impl Order {
    /// 創建新的訂單
    pub fn new(id: impl Into<String>, product: Product, quantity: u32, deadline: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            product,
            quantity,
            deadline,
            profit_per_piece: Decimal::ZERO,
            penalty_per_day: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置單件利潤
    pub fn with_profit_per_piece(mut self, profit: Decimal) -> Self {
        self.profit_per_piece = profit;
        self
    }

    /// 建構器模式：設置每日罰金
    pub fn with_penalty_per_day(mut self, penalty: Decimal) -> Self {
        self.penalty_per_day = penalty;
        self
    }

    /// 訂單總利潤（未扣罰金）
    pub fn gross_profit(&self) -> Decimal {
        Decimal::from(self.quantity) * self.profit_per_piece
    }

    /// 檢查訂單可以進入排程
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(SchedulerError::NonPositiveQuantity {
                order_id: self.id.clone(),
            });
        }
        if self.penalty_per_day < Decimal::ZERO {
            return Err(SchedulerError::NegativePenalty {
                order_id: self.id.clone(),
            });
        }
        Ok(())
    }
}
