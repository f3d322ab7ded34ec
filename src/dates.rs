use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Weekly,
    Monthly,
}

impl ViewMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub label: String,
}

impl DayEntry {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            label: date.format("%a").to_string(),
        }
    }
}

pub fn window(reference: NaiveDate, mode: ViewMode) -> Vec<DayEntry> {
    match mode {
        ViewMode::Weekly => {
            let start = week_start(reference);
            (0..7)
                .map(|offset| DayEntry::new(start + Duration::days(offset)))
                .collect()
        }
        ViewMode::Monthly => {
            let start = month_start(reference);
            (0..days_in_month(reference))
                .map(|offset| DayEntry::new(start + Duration::days(offset)))
                .collect()
        }
    }
}

pub fn previous(reference: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Weekly => reference - Duration::days(7),
        ViewMode::Monthly => reference
            .checked_sub_months(Months::new(1))
            .unwrap_or(reference),
    }
}

pub fn next(reference: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Weekly => reference + Duration::days(7),
        ViewMode::Monthly => reference
            .checked_add_months(Months::new(1))
            .unwrap_or(reference),
    }
}

pub fn period_label(reference: NaiveDate, mode: ViewMode) -> String {
    match mode {
        ViewMode::Weekly => {
            let start = week_start(reference);
            let end = start + Duration::days(6);
            format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
        }
        ViewMode::Monthly => reference.format("%B %Y").to_string(),
    }
}

// Week index 0 is Sunday, matching the rendered grid.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

fn days_in_month(date: NaiveDate) -> i64 {
    let start = month_start(date);
    match start.checked_add_months(Months::new(1)) {
        Some(next_start) => (next_start - start).num_days(),
        None => 31,
    }
}
