use crate::config::Config;
use crate::errors::{Result, TickerViewError};
use crate::models::stock::{CompanyOverview, DailySeries};
use crate::providers::base::MarketDataProvider;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// 日线序列在响应中的包装键
const DAILY_SERIES_KEY: &str = "Time Series (Daily)";

/// Alpha Vantage行情数据网关
pub struct AlphaVantageProvider {
    client: Client,
    config: Config,
}

impl AlphaVantageProvider {
    /// 创建新的Alpha Vantage数据网关
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(TickerViewError::RequestError)?;

        Ok(Self { client, config })
    }

    /// 发送查询请求，单次尝试，失败即返回
    async fn query(&self, function: &str, symbol: &str, extra: &[(&str, &str)]) -> Result<Value> {
        let mut params = vec![("function", function), ("symbol", symbol)];
        params.extend_from_slice(extra);
        params.push(("apikey", self.config.api_key.as_str()));

        debug!("请求 {} 接口, 股票代码: {}", function, symbol);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await
            .map_err(TickerViewError::RequestError)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TickerViewError::RequestFailed(status.as_u16()));
        }

        let payload: Value = response.json().await?;
        Ok(payload)
    }
}

#[async_trait]
impl MarketDataProvider for AlphaVantageProvider {
    fn provider_code(&self) -> &'static str {
        "ALPHAVANTAGE"
    }

    async fn fetch_overview(&self, symbol: &str) -> Result<CompanyOverview> {
        info!("获取 {} 的公司概况", symbol);

        let payload = self.query("OVERVIEW", symbol, &[]).await?;
        let overview = CompanyOverview::from_value(&payload);

        debug!("成功获取 {} 的公司概况", symbol);
        Ok(overview)
    }

    async fn fetch_daily_series(&self, symbol: &str) -> Result<DailySeries> {
        info!("获取 {} 的日线行情", symbol);

        let payload = self
            .query(
                "TIME_SERIES_DAILY",
                symbol,
                &[("outputsize", self.config.output_size.as_str())],
            )
            .await?;
        let series = extract_daily_series(&payload)?;

        debug!("获取到 {} 条日线记录", series.len());
        Ok(series)
    }
}

/// 从响应中提取日线序列，缺失或结构异常时归一化为 DataUnavailable
pub(crate) fn extract_daily_series(payload: &Value) -> Result<DailySeries> {
    match payload.get(DAILY_SERIES_KEY) {
        Some(series) if series.is_object() => serde_json::from_value(series.clone())
            .map_err(|e| TickerViewError::DataUnavailable(e.to_string())),
        _ => Err(TickerViewError::DataUnavailable(diagnostic_message(payload))),
    }
}

/// 服务商诊断信息优先级: Note > Error Message > 通用提示
fn diagnostic_message(payload: &Value) -> String {
    for key in ["Note", "Error Message"] {
        if let Some(message) = payload.get(key).and_then(|v| v.as_str()) {
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }

    "Time series not available".to_string()
}
