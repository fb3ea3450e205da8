//! 时间工具函数
//!
//! 日期字符串校验在 API handler 层完成，repository 层只接收
//! 校验过的 `YYYY-MM-DD` 文本和 `i64` Unix millis。

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2025-03-01").is_ok());
        assert!(parse_date("2025-3-1").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2025-13-40").is_err());
    }
}
