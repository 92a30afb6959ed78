//! Wall clock source for the watch face
//!
//! Owns the mutable UTC offset and converts host timestamps into the
//! fractional time-of-day readings the composer consumes. Readings are
//! ephemeral and recomputed every frame, never cached.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike, Utc, Weekday};

/// Fractional time of day on a 12-hour dial.
///
/// Each component carries the next-finer one as a fraction: seconds include
/// milliseconds, minutes include seconds, hours include minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockReading {
    /// Hours in `[0, 12)`.
    pub hour: f32,
    /// Minutes in `[0, 60)`.
    pub minute: f32,
    /// Seconds in `[0, 60)`.
    pub second: f32,
}

/// Calendar fields backing the date label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStamp {
    pub weekday: Weekday,
    pub day: u32,
    /// Zero-based month, `0` = January.
    pub month0: u32,
    pub year: i32,
}

/// Wall clock with a mutable time zone offset.
pub struct WallClock {
    offset: FixedOffset,
}

impl WallClock {
    /// Create a clock for the given UTC offset in seconds.
    ///
    /// An out-of-range offset falls back to UTC.
    pub fn new(offset_seconds: i32) -> Self {
        Self {
            offset: checked_offset(offset_seconds),
        }
    }

    /// Replace the zone offset, e.g. after a time-zone-changed notification.
    pub fn set_zone_offset(&mut self, offset_seconds: i32) {
        self.offset = checked_offset(offset_seconds);
    }

    /// Current zone offset in seconds east of UTC.
    pub fn zone_offset(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    /// Fractional time of day for a host timestamp in Unix milliseconds.
    pub fn reading(&self, now_millis: i64) -> ClockReading {
        let local = self.local(now_millis);
        let time = local.time();

        let second = time.second() as f32 + (time.nanosecond() / 1_000_000) as f32 / 1000.0;
        let minute = time.minute() as f32 + second / 60.0;
        let hour = (time.hour() % 12) as f32 + minute / 60.0;

        ClockReading {
            hour,
            minute,
            second,
        }
    }

    /// Calendar fields for a host timestamp in Unix milliseconds.
    pub fn date(&self, now_millis: i64) -> DateStamp {
        let local = self.local(now_millis);
        DateStamp {
            weekday: local.weekday(),
            day: local.day(),
            month0: local.month0(),
            year: local.year(),
        }
    }

    fn local(&self, now_millis: i64) -> NaiveDateTime {
        DateTime::<Utc>::from_timestamp_millis(now_millis)
            .unwrap_or(DateTime::UNIX_EPOCH)
            .with_timezone(&self.offset)
            .naive_local()
    }
}

fn checked_offset(offset_seconds: i32) -> FixedOffset {
    match FixedOffset::east_opt(offset_seconds) {
        Some(offset) => offset,
        None => {
            log::warn!("ignoring out-of-range zone offset {offset_seconds}s");
            FixedOffset::east_opt(0).unwrap()
        }
    }
}

/// Short weekday name for the date label.
pub fn short_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Short month name for the date label, `month0` is zero-based.
pub fn short_month(month0: u32) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        11 => "Dec",
        _ => "",
    }
}
