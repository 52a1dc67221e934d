use tickerview::catalog;
use tickerview::config::Config;
use tickerview::providers::alpha_vantage::AlphaVantageProvider;
use tickerview::services::view_service::{
    CancelToken, DetailView, DetailViewState, StockDetailService,
};
use tickerview::util;

use clap::{App, Arg, SubCommand};
use colored::Colorize;
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    // 创建基本的命令行应用
    let app = App::new("TickerView")
        .version("1.0.0")
        .author("TickerView Team")
        .about("Stock viewer with company overview and daily price history");

    // 添加子命令
    let app = app
        .subcommand(SubCommand::with_name("list").about("List the available ticker catalog"))
        .subcommand(
            SubCommand::with_name("show")
                .about("Show company overview and daily prices for a symbol")
                .arg(
                    Arg::with_name("symbol")
                        .short('s')
                        .long("symbol")
                        .value_name("SYMBOL")
                        .help("Stock symbol to show (e.g. AAPL)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("api-key")
                        .long("api-key")
                        .value_name("API_KEY")
                        .help("Alpha Vantage API key (defaults to the ALPHA_VANTAGE_KEY environment variable)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("output-size")
                        .long("output-size")
                        .value_name("SIZE")
                        .help("Series window to request (compact, full)")
                        .takes_value(true)
                        .default_value("compact"),
                )
                .arg(
                    Arg::with_name("timeout")
                        .long("timeout")
                        .value_name("SECONDS")
                        .help("Optional request timeout in seconds")
                        .takes_value(true),
                ),
        );

    let matches = app.get_matches();

    if matches.subcommand_matches("list").is_some() {
        render_listing();
    } else if let Some(matches) = matches.subcommand_matches("show") {
        // 详情页：缺少股票代码时渲染回退提示
        let symbol = match matches.value_of("symbol") {
            Some(symbol) => symbol.to_uppercase(),
            None => {
                println!("Missing stock symbol.");
                return Ok(());
            }
        };

        // API密钥只在这里读取，并通过配置注入网关
        let api_key = matches
            .value_of("api-key")
            .map(str::to_string)
            .or_else(|| std::env::var("ALPHA_VANTAGE_KEY").ok())
            .unwrap_or_default();
        if api_key.is_empty() {
            anyhow::bail!("No API key: pass --api-key or set ALPHA_VANTAGE_KEY");
        }

        let mut config = Config::new(&api_key)
            .with_output_size(matches.value_of("output-size").unwrap_or("compact"));
        if let Some(timeout) = matches.value_of("timeout") {
            config = config.with_timeout_secs(timeout.parse()?);
        }

        let provider = AlphaVantageProvider::new(config)?;
        let service = StockDetailService::new(Arc::new(provider));

        let mut view = DetailView::new(&symbol);
        let cancel = CancelToken::new();

        println!("Loading {} ...", symbol);
        let outcome = service.load_detail(&symbol, &cancel).await;
        view.apply(outcome);

        render_detail(&view);
    } else {
        info!("No command specified. Use --help for usage information.");
    }

    Ok(())
}

// 渲染股票目录列表
fn render_listing() {
    println!("Stocks");
    println!("Select a stock to view company overview and daily price history.");
    println!();
    println!("{:<8} {:<36} {}", "Symbol", "Name", "Logo");
    println!("{:-<80}", "");

    for ticker in catalog::TICKERS {
        let logo = catalog::logo_url(ticker.symbol).unwrap_or_default();
        println!("{:<8} {:<36} {}", ticker.symbol, ticker.name, logo);
    }
}

// 渲染详情页：概况卡片和价格表；加载失败时只渲染错误横幅
fn render_detail(view: &DetailView) {
    match view.state() {
        DetailViewState::Loading => {
            println!("Loading...");
        }
        DetailViewState::Failed { message } => {
            eprintln!("{}", format!("Error: {}", message).red().bold());
        }
        DetailViewState::Ready { overview, rows } => {
            println!();
            println!("{} - {}", view.symbol, overview.display_field("Name"));
            println!();

            println!("Company Overview");
            println!("{:-<64}", "");
            println!("{:<24} {}", "Symbol", view.symbol);
            for key in [
                "AssetType",
                "Exchange",
                "Sector",
                "Industry",
                "MarketCapitalization",
            ] {
                println!("{:<24} {}", key, overview.display_field(key));
            }

            println!();
            println!("Description");
            println!("{:-<64}", "");
            println!("{}", overview.display_field("Description"));

            println!();
            println!("Historical Daily Prices");
            println!(
                "{:<12} {:>10} {:>15} {:>10}",
                "Date", "Close", "Volume", "% Change"
            );
            println!("{:-<52}", "");

            for row in rows {
                let change = util::format_percent_change(row.percent_change);
                // 上涨绿色、下跌红色，首行占位与零涨跌保持中性
                let change = match row.percent_change {
                    Some(pc) if pc > 0.0 => change.green(),
                    Some(pc) if pc < 0.0 => change.red(),
                    _ => change.normal(),
                };

                println!(
                    "{:<12} {:>10} {:>15} {:>10}",
                    row.date,
                    util::format_close(row.close),
                    util::format_volume(row.volume),
                    change
                );
            }
        }
    }
}
