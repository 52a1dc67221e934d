use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// 单日行情数据，服务商以编号键、文本值的形式返回
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    #[serde(rename = "5. volume")]
    pub volume: String,
    // 服务商附带的其他字段，原样保留
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

/// 日线序列：日期(YYYY-MM-DD) -> 当日行情，源数据不保证顺序
pub type DailySeries = HashMap<String, DailyRecord>;

/// Company overview as an open field-to-text mapping
///
/// 任何字段都可能缺失或为空白，展示时统一退化为 "N/A"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyOverview {
    #[serde(flatten)]
    fields: HashMap<String, String>,
}

impl CompanyOverview {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从JSON对象构建概况，非字符串值转为文本保留
    pub fn from_value(value: &Value) -> Self {
        let mut fields = HashMap::new();
        if let Some(object) = value.as_object() {
            for (key, field) in object {
                let text = match field {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                fields.insert(key.clone(), text);
            }
        }
        Self { fields }
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|v| v.as_str())
    }

    /// 字段回退格式化：有非空白值则返回去除首尾空白的值，否则返回 "N/A"
    pub fn display_field(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => "N/A".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// 展示用的单行价格数据，由日线序列派生
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub date: String,
    pub close: f64,
    pub volume: i64,
    /// 相对前一交易日收盘价的涨跌幅（百分比），序列首行为 None
    pub percent_change: Option<f64>,
}
