use crate::models::stock::{DailySeries, PriceRow};

/// 将日期索引的日线序列转换为按日期升序的展示行
///
/// 纯函数，不会失败：数值文本解析失败时收盘价以 NaN 继续传播，
/// 成交量回退为 0。涨跌幅相对排序后紧邻的前一行收盘价计算，
/// 首行没有前值，为 None。
pub fn build_price_rows(series: &DailySeries) -> Vec<PriceRow> {
    let mut entries: Vec<_> = series.iter().collect();

    // ISO日期(YYYY-MM-DD)按字典序排序即等价于按时间排序
    entries.sort_by(|(d1, _), (d2, _)| d1.cmp(d2));

    let mut prev_close: Option<f64> = None;
    let mut rows = Vec::with_capacity(entries.len());

    for (date, daily) in entries {
        let close = daily.close.trim().parse::<f64>().unwrap_or(f64::NAN);
        let volume = daily.volume.trim().parse::<i64>().unwrap_or_default();
        let percent_change = prev_close.map(|prev| (close - prev) / prev * 100.0);

        prev_close = Some(close);

        rows.push(PriceRow {
            date: date.clone(),
            close,
            volume,
            percent_change,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stock::DailyRecord;
    use std::collections::HashMap;

    fn daily(close: &str, volume: &str) -> DailyRecord {
        DailyRecord {
            open: "0".to_string(),
            high: "0".to_string(),
            low: "0".to_string(),
            close: close.to_string(),
            volume: volume.to_string(),
            extra: HashMap::new(),
        }
    }

    fn series(entries: &[(&str, DailyRecord)]) -> DailySeries {
        entries
            .iter()
            .map(|(date, record)| (date.to_string(), record.clone()))
            .collect()
    }

    #[test]
    fn rows_come_out_date_sorted_with_first_change_absent() {
        let series = series(&[
            ("2024-01-03", daily("110", "2000")),
            ("2024-01-02", daily("100", "1000")),
        ]);

        let rows = build_price_rows(&series);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2024-01-02");
        assert_eq!(rows[0].close, 100.0);
        assert_eq!(rows[0].volume, 1000);
        assert_eq!(rows[0].percent_change, None);
        assert_eq!(rows[1].date, "2024-01-03");
        assert!((rows[1].percent_change.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn percent_change_uses_previous_sorted_row_not_calendar_adjacency() {
        // 2024-01-05的前一行是2024-01-02，中间无交易日
        let series = series(&[
            ("2024-01-05", daily("50", "1")),
            ("2024-01-02", daily("40", "1")),
            ("2024-01-08", daily("25", "1")),
        ]);

        let rows = build_price_rows(&series);

        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-02", "2024-01-05", "2024-01-08"]);
        assert!((rows[1].percent_change.unwrap() - 25.0).abs() < 1e-9);
        assert!((rows[2].percent_change.unwrap() - (-50.0)).abs() < 1e-9);
    }

    #[test]
    fn unchanged_close_yields_zero_percent() {
        let series = series(&[
            ("2024-02-01", daily("75.5", "10")),
            ("2024-02-02", daily("75.5", "20")),
        ]);

        let rows = build_price_rows(&series);

        assert_eq!(rows[1].percent_change, Some(0.0));
    }

    #[test]
    fn build_price_rows_is_idempotent() {
        let series = series(&[
            ("2024-03-01", daily("10", "100")),
            ("2024-03-04", daily("12", "200")),
            ("2024-03-05", daily("9", "300")),
        ]);

        assert_eq!(build_price_rows(&series), build_price_rows(&series));
    }

    #[test]
    fn malformed_close_propagates_nan_instead_of_failing() {
        let series = series(&[
            ("2024-04-01", daily("100", "10")),
            ("2024-04-02", daily("not-a-number", "10")),
            ("2024-04-03", daily("105", "10")),
        ]);

        let rows = build_price_rows(&series);

        assert!(rows[1].close.is_nan());
        assert!(rows[1].percent_change.unwrap().is_nan());
        // 前值已经是NaN，后一行的涨跌幅同样退化
        assert!(rows[2].percent_change.unwrap().is_nan());
        assert_eq!(rows[2].close, 105.0);
    }

    #[test]
    fn malformed_volume_falls_back_to_zero() {
        let series = series(&[("2024-05-06", daily("10", ""))]);

        let rows = build_price_rows(&series);

        assert_eq!(rows[0].volume, 0);
        assert_eq!(rows[0].percent_change, None);
    }

    #[test]
    fn single_entry_series_has_one_row_without_change() {
        let series = series(&[("2024-06-03", daily("200.25", "42"))]);

        let rows = build_price_rows(&series);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].close, 200.25);
        assert_eq!(rows[0].percent_change, None);
    }

    #[test]
    fn empty_series_yields_no_rows() {
        assert!(build_price_rows(&DailySeries::new()).is_empty());
    }
}
