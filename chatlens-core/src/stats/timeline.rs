use crate::stats::request::StatsRequest;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    /// `"MonthName-Year"`, e.g. `"January-2023"`.
    pub label: String,
    pub messages: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: u64,
}

/// Messages per calendar month, oldest first.
pub fn monthly_timeline(req: &StatsRequest<'_>) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), (&'static str, u64)> = BTreeMap::new();

    for msg in req.messages() {
        let cal = &msg.calendar;
        months
            .entry((cal.year, cal.month))
            .or_insert((cal.month_name, 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (month_name, messages))| MonthlyCount {
            year,
            month,
            month_name,
            label: format!("{month_name}-{year}"),
            messages,
        })
        .collect()
}

/// Messages per calendar date, oldest first. Days without messages are absent.
pub fn daily_timeline(req: &StatsRequest<'_>) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for msg in req.messages() {
        *days.entry(msg.calendar.date).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}
