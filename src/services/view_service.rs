use crate::models::stock::{CompanyOverview, PriceRow};
use crate::providers::base::MarketDataProvider;
use crate::transform::build_price_rows;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 取消令牌：视图被替换或卸载时置位，晚到的结果必须丢弃
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// 详情视图的可见状态
#[derive(Debug, Clone)]
pub enum DetailViewState {
    Loading,
    Ready {
        overview: CompanyOverview,
        rows: Vec<PriceRow>,
    },
    Failed {
        message: String,
    },
}

/// 单个股票的详情视图，持有自己的加载生命周期
#[derive(Debug)]
pub struct DetailView {
    pub symbol: String,
    state: DetailViewState,
}

impl DetailView {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            state: DetailViewState::Loading,
        }
    }

    pub fn state(&self) -> &DetailViewState {
        &self.state
    }

    /// 提交一次加载结果；被取消的加载返回None，不改变可见状态
    pub fn apply(&mut self, outcome: Option<DetailViewState>) {
        if let Some(state) = outcome {
            self.state = state;
        }
    }
}

/// 详情数据服务：并发获取公司概况与日线行情并派生展示行
pub struct StockDetailService {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
}

impl StockDetailService {
    /// 创建新的详情数据服务
    pub fn new(provider: Arc<dyn MarketDataProvider + Send + Sync>) -> Self {
        Self { provider }
    }

    /// 执行一次详情加载
    ///
    /// 两路请求并发发出并汇合；提交结果前检查取消令牌，
    /// 已取消的加载返回None。网关失败映射为 Failed 状态，
    /// 此时只渲染错误信息，不渲染数据。
    pub async fn load_detail(
        &self,
        symbol: &str,
        cancel: &CancelToken,
    ) -> Option<DetailViewState> {
        info!("加载 {} 的详情数据", symbol);

        let result = tokio::try_join!(
            self.provider.fetch_overview(symbol),
            self.provider.fetch_daily_series(symbol),
        );

        if cancel.is_cancelled() {
            debug!("{} 的加载已被取消，丢弃结果", symbol);
            return None;
        }

        match result {
            Ok((overview, series)) => {
                let rows = build_price_rows(&series);
                info!("成功加载 {} 的详情, 共 {} 行价格数据", symbol, rows.len());
                Some(DetailViewState::Ready { overview, rows })
            }
            Err(e) => {
                warn!("加载 {} 失败: {}", symbol, e);
                Some(DetailViewState::Failed {
                    message: e.to_string(),
                })
            }
        }
    }
}
