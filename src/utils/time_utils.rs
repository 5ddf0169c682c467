use chrono::{DateTime, Local};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_MIN * 5;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_MIN * 15;
    pub const MS_IN_30_MIN: i64 = Self::MS_IN_MIN * 30;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_4_H: i64 = Self::MS_IN_H * 4;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const MS_IN_1_M: i64 = Self::MS_IN_D * 30; // approx, calendar months are out of scope
    pub const STANDARD_TIME_FORMAT: &'static str = "%Y-%m-%d %H:%M";
}

// Time Helper functions

pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    // Used for display purposes
    let dt = DateTime::from_timestamp_millis(epoch_ms).unwrap_or_default();
    format!("{}", dt.format(TimeUtils::STANDARD_TIME_FORMAT))
}

pub fn now_timestamp_ms() -> i64 {
    let now_local = Local::now();
    now_local.timestamp_millis()
}
