use crate::errors::Result;
use crate::models::stock::{CompanyOverview, DailySeries};
use async_trait::async_trait;

/// Base trait for market data gateways
#[async_trait]
pub trait MarketDataProvider {
    /// Get the provider code this gateway is for
    fn provider_code(&self) -> &'static str;

    /// Fetch the company overview for a specific symbol
    /// Case-insensitivity is the caller's responsibility (uppercase beforehand)
    async fn fetch_overview(&self, symbol: &str) -> Result<CompanyOverview>;

    /// Fetch the daily OHLCV series for a specific symbol
    /// Returns a date-keyed map with no ordering guarantee
    async fn fetch_daily_series(&self, symbol: &str) -> Result<DailySeries>;
}
