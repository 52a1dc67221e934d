/// 列表页的股票目录项
#[derive(Debug, Clone, Copy)]
pub struct TickerInfo {
    pub symbol: &'static str,
    pub name: &'static str,
}

/// 固定的股票目录，列表页只展示这些标的
pub const TICKERS: &[TickerInfo] = &[
    TickerInfo { symbol: "AAPL", name: "Apple Inc." },
    TickerInfo { symbol: "MSFT", name: "Microsoft Corporation" },
    TickerInfo { symbol: "GOOGL", name: "Alphabet Inc. (Class A)" },
    TickerInfo { symbol: "AMZN", name: "Amazon.com, Inc." },
    TickerInfo { symbol: "META", name: "Meta Platforms, Inc." },
    TickerInfo { symbol: "TSLA", name: "Tesla, Inc." },
    TickerInfo { symbol: "NVDA", name: "NVIDIA Corporation" },
    TickerInfo { symbol: "NFLX", name: "Netflix, Inc." },
    TickerInfo { symbol: "IBM", name: "International Business Machines" },
    TickerInfo { symbol: "ORCL", name: "Oracle Corporation" },
    TickerInfo { symbol: "INTC", name: "Intel Corporation" },
    TickerInfo { symbol: "ADBE", name: "Adobe Inc." },
    TickerInfo { symbol: "CRM", name: "Salesforce, Inc." },
    TickerInfo { symbol: "SHOP", name: "Shopify Inc." },
    TickerInfo { symbol: "SQ", name: "Block, Inc." },
];

// 股票代码 -> 公司域名，仅用于拼装Logo地址
const SYMBOL_TO_DOMAIN: &[(&str, &str)] = &[
    ("AAPL", "apple.com"),
    ("MSFT", "microsoft.com"),
    ("GOOGL", "abc.xyz"),
    ("AMZN", "amazon.com"),
    ("META", "meta.com"),
    ("TSLA", "tesla.com"),
    ("NVDA", "nvidia.com"),
    ("NFLX", "netflix.com"),
    ("IBM", "ibm.com"),
    ("ORCL", "oracle.com"),
    ("INTC", "intel.com"),
    ("ADBE", "adobe.com"),
    ("CRM", "salesforce.com"),
    ("SHOP", "shopify.com"),
    ("SQ", "block.xyz"),
];

/// 按代码查找目录项，忽略大小写
pub fn find(symbol: &str) -> Option<&'static TickerInfo> {
    TICKERS
        .iter()
        .find(|ticker| ticker.symbol.eq_ignore_ascii_case(symbol))
}

/// 已知股票返回Logo地址，未知返回None，调用方需容忍缺失
pub fn logo_url(symbol: &str) -> Option<String> {
    SYMBOL_TO_DOMAIN
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(symbol))
        .map(|(_, domain)| format!("https://logo.clearbit.com/{}", domain))
}
