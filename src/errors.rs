use thiserror::Error;

#[derive(Error, Debug)]
pub enum TickerViewError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Request failed with status {0}")]
    RequestFailed(u16),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, TickerViewError>;

// 用于从字符串创建错误
impl From<String> for TickerViewError {
    fn from(s: String) -> Self {
        TickerViewError::Unknown(s)
    }
}

// 用于从&str创建错误
impl From<&str> for TickerViewError {
    fn from(s: &str) -> Self {
        TickerViewError::Unknown(s.to_string())
    }
}
