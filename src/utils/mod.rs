mod maths_utils;
mod time_utils;

pub use time_utils::{epoch_ms_to_date_string, now_timestamp_ms, TimeUtils};

pub use maths_utils::{mean_and_stddev, round_2dp};
