//! 时间工具函数 - date input parsing and entry timestamps

use chrono::{Local, NaiveDate, NaiveDateTime};
use shared::error::{AppError, AppResult, ErrorCode};

/// Display format of booking entry and report timestamps
pub const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidDateBound,
            format!("Invalid date format: {}", date),
        )
        .with_detail("value", date)
    })
}

/// Date bound input: blank clears the bound, anything else must be a date
pub fn parse_date_bound(input: Option<&str>) -> AppResult<Option<String>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw).map(|d| Some(d.format("%Y-%m-%d").to_string())),
    }
}

/// Format a timestamp the way booking entries are stored
pub fn format_minute(at: NaiveDateTime) -> String {
    at.format(MINUTE_FORMAT).to_string()
}

/// Current local time, minute precision
pub fn now_minute() -> String {
    format_minute(Local::now().naive_local())
}
