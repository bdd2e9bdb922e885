//! Publication-slot arithmetic for the KMA forecast endpoints.
//!
//! The upstream service only serves data for fixed issue times, so every
//! request must carry the newest `base_date`/`base_time` pair that has
//! already been published. Schedules are defined in Korean Standard Time
//! no matter where this server runs.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};

/// KST (UTC+9) offset in seconds.
const KST_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Hours of the eight daily short-range issues.
const STANDARD_SLOT_HOURS: [u32; 8] = [2, 5, 8, 11, 14, 17, 20, 23];

/// A publication instant in the upstream API's `base_date`/`base_time` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTime {
    /// Calendar date of the issue, `YYYYMMDD`
    pub base_date: String,
    /// Wall-clock time of the issue, `HHMM`
    pub base_time: String,
}

impl BaseTime {
    fn from_slot(date: NaiveDate, hour: u32, minute: u32) -> Self {
        Self {
            base_date: date.format("%Y%m%d").to_string(),
            base_time: format!("{:02}{:02}", hour, minute),
        }
    }
}

fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_UTC_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().expect("date is above the calendar minimum")
}

/// Latest 3-hourly issue at or before `now`.
///
/// Current-conditions and short-range forecast data are issued eight times a
/// day, on the hour, starting at 02:00 KST. Before the day's first issue the
/// previous day's 23:00 issue is the newest available.
pub fn standard_base_time(now: DateTime<Utc>) -> BaseTime {
    let local = now.with_timezone(&kst());
    let hour = local.hour();

    match STANDARD_SLOT_HOURS
        .iter()
        .rev()
        .copied()
        .find(|&slot| hour >= slot)
    {
        Some(slot) => BaseTime::from_slot(local.date_naive(), slot, 0),
        None => BaseTime::from_slot(previous_day(local.date_naive()), 23, 0),
    }
}

/// Latest half-hourly issue at or before `now`.
///
/// Very-short-range forecasts are issued at half past every hour; between
/// midnight and 00:29 KST the newest issue is 23:30 on the previous day.
pub fn ultra_short_base_time(now: DateTime<Utc>) -> BaseTime {
    let local = now.with_timezone(&kst());
    let date = local.date_naive();

    if local.minute() >= 30 {
        BaseTime::from_slot(date, local.hour(), 30)
    } else if local.hour() == 0 {
        BaseTime::from_slot(previous_day(date), 23, 30)
    } else {
        BaseTime::from_slot(date, local.hour() - 1, 30)
    }
}
