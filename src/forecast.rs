//! Turns the flat hourly series into date-grouped, future-only entries.
//!
//! Timestamps are local wall-clock times. Grouping is recomputed on every
//! render; a week of hourly data is small enough that nothing is cached.

use crate::error::ForecastError;
use crate::weather::HourlySeries;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub entries: Vec<HourlyEntry>,
}

impl DateGroup {
    pub fn label(&self) -> String {
        format_date_label(self.date)
    }
}

/// Parse an hourly timestamp into local wall-clock time.
///
/// Accepts `YYYY-MM-DDTHH:MM` with optional seconds, or RFC 3339 with an
/// offset (converted to the local zone).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

/// `1/2/2024`
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `09:00 AM`
pub fn format_hour_label(time: NaiveDateTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// `10:30:00 AM`
pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format("%-I:%M:%S %p").to_string()
}

/// Pair `time[i]` with `temperature_2m[i]`, rejecting series of unequal length.
pub fn zip_hourly(hourly: &HourlySeries) -> Result<Vec<HourlyEntry>, ForecastError> {
    if hourly.time.len() != hourly.temperature_2m.len() {
        return Err(ForecastError::IndexMismatch {
            times: hourly.time.len(),
            temperatures: hourly.temperature_2m.len(),
        });
    }
    Ok(zip_truncating(hourly))
}

/// Same pairing, but a length mismatch truncates to the shorter sequence.
pub fn zip_hourly_lenient(hourly: &HourlySeries) -> Vec<HourlyEntry> {
    match zip_hourly(hourly) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("{}; truncating to the shorter series", e);
            zip_truncating(hourly)
        }
    }
}

fn zip_truncating(hourly: &HourlySeries) -> Vec<HourlyEntry> {
    hourly
        .time
        .iter()
        .zip(&hourly.temperature_2m)
        .filter_map(|(raw, &temp)| match parse_timestamp(raw) {
            Some(time) => Some(HourlyEntry { time, temp }),
            None => {
                tracing::debug!("Skipping unparseable timestamp: {}", raw);
                None
            }
        })
        .collect()
}

/// Partition entries strictly after `now` by calendar date.
///
/// Date keys keep first-seen order and entries keep their input order
/// within each date.
pub fn group_future(entries: &[HourlyEntry], now: NaiveDateTime) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();

    for entry in entries.iter().filter(|entry| entry.time > now) {
        let date = entry.time.date();
        match groups.iter_mut().find(|group| group.date == date) {
            Some(group) => group.entries.push(entry.clone()),
            None => groups.push(DateGroup {
                date,
                entries: vec![entry.clone()],
            }),
        }
    }

    groups
}

/// Full pipeline used by the view: lenient zip, then future-only grouping.
pub fn grouped_forecast(hourly: &HourlySeries, now: NaiveDateTime) -> Vec<DateGroup> {
    group_future(&zip_hourly_lenient(hourly), now)
}
