use tickerview::config::Config;
use tickerview::providers::alpha_vantage::AlphaVantageProvider;
use tickerview::providers::base::MarketDataProvider;
use tickerview::transform::build_price_rows;
use tickerview::util;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 创建数据网关，密钥在启动时注入
    let api_key = std::env::var("ALPHA_VANTAGE_KEY").unwrap_or_else(|_| "demo".to_string());
    let provider = AlphaVantageProvider::new(Config::new(&api_key))?;

    let symbol = "IBM";

    // 获取公司概况
    let overview = provider.fetch_overview(symbol).await?;
    println!("股票: {} ({})", overview.display_field("Name"), symbol);
    println!("交易所: {}", overview.display_field("Exchange"));
    println!("行业: {}", overview.display_field("Industry"));
    println!("市值: {}", overview.display_field("MarketCapitalization"));

    // 获取日线行情
    let series = provider.fetch_daily_series(symbol).await?;
    println!("\n日线数据数量: {}", series.len());

    if let Some(latest) = util::latest_trading_date(&series) {
        println!("最新交易日期: {}", latest);
    }

    // 派生展示行，显示最近5天数据
    let rows = build_price_rows(&series);
    println!("\n最近5天数据:");
    println!(
        "{:<12} {:<10} {:<15} {:<10}",
        "日期", "收盘", "成交量", "涨跌幅"
    );
    println!("{:-<50}", "");

    for row in rows.iter().rev().take(5) {
        println!(
            "{:<12} {:<10} {:<15} {:<10}",
            row.date,
            util::format_close(row.close),
            util::format_volume(row.volume),
            util::format_percent_change(row.percent_change)
        );
    }

    Ok(())
}
