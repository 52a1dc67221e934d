/// 数据网关配置，由宿主程序在启动时构建并注入
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub output_size: String,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: "https://www.alphavantage.co/query".to_string(),
            output_size: "compact".to_string(),
            timeout_secs: None,
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn with_output_size(mut self, size: &str) -> Self {
        self.output_size = size.to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}
