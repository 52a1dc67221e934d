use crate::models::stock::DailySeries;
use chrono::NaiveDate;

// 展示格式化工具

/// 收盘价保留两位小数
pub fn format_close(close: f64) -> String {
    format!("{:.2}", close)
}

/// 成交量按千分位分组
pub fn format_volume(volume: i64) -> String {
    let digits = volume.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if volume < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// 涨跌幅渲染为带符号的百分比，首行无前值时显示占位符
pub fn format_percent_change(percent_change: Option<f64>) -> String {
    match percent_change {
        None => "—".to_string(),
        Some(pc) if pc > 0.0 => format!("+{:.2}%", pc),
        Some(pc) => format!("{:.2}%", pc),
    }
}

/// 序列中最新的交易日期
pub fn latest_trading_date(series: &DailySeries) -> Option<NaiveDate> {
    series
        .keys()
        .max()
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stock::DailyRecord;
    use std::collections::HashMap;

    #[test]
    fn volume_groups_by_thousands() {
        assert_eq!(format_volume(0), "0");
        assert_eq!(format_volume(999), "999");
        assert_eq!(format_volume(1000), "1,000");
        assert_eq!(format_volume(48087681), "48,087,681");
    }

    #[test]
    fn percent_change_renders_sign_and_placeholder() {
        assert_eq!(format_percent_change(None), "—");
        assert_eq!(format_percent_change(Some(10.0)), "+10.00%");
        assert_eq!(format_percent_change(Some(-5.5)), "-5.50%");
        assert_eq!(format_percent_change(Some(0.0)), "0.00%");
    }

    #[test]
    fn close_keeps_two_decimals() {
        assert_eq!(format_close(190.4), "190.40");
        assert_eq!(format_close(100.0), "100.00");
    }

    #[test]
    fn latest_trading_date_is_the_lexical_max_key() {
        let record = DailyRecord {
            open: "1".to_string(),
            high: "1".to_string(),
            low: "1".to_string(),
            close: "1".to_string(),
            volume: "1".to_string(),
            extra: HashMap::new(),
        };
        let series: DailySeries = [
            ("2024-01-03".to_string(), record.clone()),
            ("2024-01-10".to_string(), record.clone()),
            ("2024-01-05".to_string(), record),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            latest_trading_date(&series),
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );
    }

    #[test]
    fn latest_trading_date_of_empty_series_is_none() {
        assert_eq!(latest_trading_date(&DailySeries::new()), None);
    }
}
