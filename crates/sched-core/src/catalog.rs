//! 產品目錄：各產品每道工序的單件加工時間與各工序機台數量

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{Result, SchedulerError};

/// 工序數量（切割、折彎、焊接、測試、噴漆、包裝）
pub const STAGE_COUNT: usize = 6;

/// 產品類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Product {
    #[serde(rename = "GYB")]
    Gyb,
    #[serde(rename = "FB")]
    Fb,
    #[serde(rename = "SB")]
    Sb,
}

impl Product {
    /// 全部產品
    pub const ALL: [Product; 3] = [Product::Gyb, Product::Fb, Product::Sb];

    /// 產品代碼
    pub fn code(&self) -> &'static str {
        match self {
            Product::Gyb => "GYB",
            Product::Fb => "FB",
            Product::Sb => "SB",
        }
    }

    fn index(&self) -> usize {
        match self {
            Product::Gyb => 0,
            Product::Fb => 1,
            Product::Sb => 2,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Product {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "GYB" => Ok(Product::Gyb),
            "FB" => Ok(Product::Fb),
            "SB" => Ok(Product::Sb),
            other => Err(SchedulerError::UnknownProduct(other.to_string())),
        }
    }
}

/// 工序設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSpec {
    /// 工序名稱（用於機台標籤）
    pub name: String,

    /// 並行機台數量
    pub machines: usize,
}

impl StageSpec {
    pub fn new(name: impl Into<String>, machines: usize) -> Self {
        Self {
            name: name.into(),
            machines,
        }
    }
}

/// 產品目錄
///
/// 建立後唯讀。加工時間以產品索引存放在定長陣列中，查詢不會失敗；
/// 從設定檔載入時經由 [`CatalogFile`] 檢查每個產品都有完整的時間表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct ProductCatalog {
    stages: [StageSpec; STAGE_COUNT],
    processing_minutes: [[u32; STAGE_COUNT]; 3],
}

impl ProductCatalog {
    /// 建立產品目錄
    pub fn new(
        stages: [StageSpec; STAGE_COUNT],
        processing_minutes: [[u32; STAGE_COUNT]; 3],
    ) -> Self {
        Self {
            stages,
            processing_minutes,
        }
    }

    /// 工廠標準目錄
    pub fn standard() -> Self {
        Self::new(
            [
                StageSpec::new("Cutting", 6),
                StageSpec::new("Bending", 2),
                StageSpec::new("Welding", 3),
                StageSpec::new("Testing", 1),
                StageSpec::new("Painting", 4),
                StageSpec::new("Packaging", 3),
            ],
            [
                [5, 10, 8, 5, 12, 10],
                [8, 16, 12, 5, 20, 15],
                [6, 15, 10, 5, 15, 12],
            ],
        )
    }

    /// 工序名稱
    pub fn stage_name(&self, stage: usize) -> &str {
        &self.stages[stage].name
    }

    /// 工序機台數量
    pub fn machine_count(&self, stage: usize) -> usize {
        self.stages[stage].machines
    }

    /// 產品在某工序的單件加工時間（分鐘）
    pub fn processing_time(&self, product: Product, stage: usize) -> u32 {
        self.processing_minutes[product.index()][stage]
    }

    /// 產品全部工序的單件加工時間
    pub fn processing_times(&self, product: Product) -> &[u32; STAGE_COUNT] {
        &self.processing_minutes[product.index()]
    }

    /// 替換某工序的機台數量
    pub fn with_machine_count(mut self, stage: usize, machines: usize) -> Self {
        self.stages[stage].machines = machines;
        self
    }

    /// 替換某產品的加工時間
    pub fn with_processing_times(mut self, product: Product, minutes: [u32; STAGE_COUNT]) -> Self {
        self.processing_minutes[product.index()] = minutes;
        self
    }

    /// 檢查每道工序至少有一台機台
    pub fn validate(&self) -> Result<()> {
        for (stage, spec) in self.stages.iter().enumerate() {
            if spec.machines == 0 {
                return Err(SchedulerError::ZeroCapacity { stage });
            }
        }
        Ok(())
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// 產品目錄的設定檔格式（以產品代碼為鍵）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub stages: [StageSpec; STAGE_COUNT],
    pub processing_minutes: BTreeMap<Product, [u32; STAGE_COUNT]>,
}

impl TryFrom<CatalogFile> for ProductCatalog {
    type Error = SchedulerError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        let mut processing_minutes = [[0; STAGE_COUNT]; 3];
        for product in Product::ALL {
            let minutes = file
                .processing_minutes
                .get(&product)
                .ok_or_else(|| SchedulerError::MissingProcessingTimes(product.code().to_string()))?;
            processing_minutes[product.index()] = *minutes;
        }
        Ok(Self::new(file.stages, processing_minutes))
    }
}

impl From<ProductCatalog> for CatalogFile {
    fn from(catalog: ProductCatalog) -> Self {
        let processing_minutes = Product::ALL
            .iter()
            .map(|p| (*p, catalog.processing_minutes[p.index()]))
            .collect();
        Self {
            stages: catalog.stages,
            processing_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_standard_catalog() {
        let catalog = ProductCatalog::standard();

        assert_eq!(catalog.machine_count(0), 6);
        assert_eq!(catalog.machine_count(3), 1);
        assert_eq!(catalog.stage_name(4), "Painting");
        assert_eq!(catalog.processing_times(Product::Gyb), &[5, 10, 8, 5, 12, 10]);
        assert_eq!(catalog.processing_time(Product::Fb, 4), 20);
        assert!(catalog.validate().is_ok());
    }

    #[rstest]
    #[case("GYB", Product::Gyb)]
    #[case("FB", Product::Fb)]
    #[case(" SB ", Product::Sb)]
    fn test_parse_product(#[case] input: &str, #[case] expected: Product) {
        assert_eq!(input.parse::<Product>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_product() {
        let err = "XB".parse::<Product>().unwrap_err();
        assert!(matches!(err, SchedulerError::UnknownProduct(code) if code == "XB"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let catalog = ProductCatalog::standard().with_machine_count(2, 0);
        assert!(matches!(
            catalog.validate(),
            Err(SchedulerError::ZeroCapacity { stage: 2 })
        ));
    }

    #[test]
    fn test_catalog_json_roundtrip_uses_product_codes() {
        let json = serde_json::to_string(&ProductCatalog::standard()).unwrap();
        assert!(json.contains("\"GYB\""));

        let parsed: ProductCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ProductCatalog::standard());
    }

    #[test]
    fn test_catalog_json_missing_product() {
        let json = r#"{
            "stages": [
                {"name": "A", "machines": 1}, {"name": "B", "machines": 1},
                {"name": "C", "machines": 1}, {"name": "D", "machines": 1},
                {"name": "E", "machines": 1}, {"name": "F", "machines": 1}
            ],
            "processing_minutes": {"GYB": [1, 1, 1, 1, 1, 1]}
        }"#;

        let err = serde_json::from_str::<ProductCatalog>(json).unwrap_err();
        assert!(err.to_string().contains("FB"));
    }
}
