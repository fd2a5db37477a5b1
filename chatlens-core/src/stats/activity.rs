use crate::parse::{CalendarFields, DAY_NAMES, hour_bucket};
use crate::stats::frequency::FrequencyTable;
use crate::stats::request::StatsRequest;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub name: &'static str,
    pub messages: u64,
}

/// Messages per weekday name, in the order the weekdays first appear.
pub fn week_activity(req: &StatsRequest<'_>) -> Vec<ActivityCount> {
    activity_by(req, |cal| cal.day_name)
}

/// Messages per month name (all years together), in first-appearance order.
pub fn month_activity(req: &StatsRequest<'_>) -> Vec<ActivityCount> {
    activity_by(req, |cal| cal.month_name)
}

fn activity_by(
    req: &StatsRequest<'_>,
    key: impl Fn(&CalendarFields) -> &'static str,
) -> Vec<ActivityCount> {
    req.messages()
        .map(|m| key(&m.calendar))
        .collect::<FrequencyTable<_>>()
        .into_encounter_order()
        .into_iter()
        .map(|(name, messages)| ActivityCount { name, messages })
        .collect()
}

/// Weekday × hour-bucket message counts.
///
/// Only weekdays and buckets that occur are kept, in calendar order
/// (Monday first, midnight first). Absent combinations are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub days: Vec<&'static str>,
    pub buckets: Vec<&'static str>,
    /// `cells[day][bucket]`, aligned with `days` and `buckets`.
    pub cells: Vec<Vec<u64>>,
}

impl Heatmap {
    pub fn get(&self, day: &str, bucket: &str) -> u64 {
        let Some(row) = self.days.iter().position(|d| *d == day) else {
            return 0;
        };
        let Some(col) = self.buckets.iter().position(|b| *b == bucket) else {
            return 0;
        };
        self.cells[row][col]
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    pub fn max_cell(&self) -> u64 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

pub fn activity_heatmap(req: &StatsRequest<'_>) -> Heatmap {
    let mut grid = [[0u64; 24]; 7];

    for msg in req.messages() {
        let day = weekday_index(msg.calendar.day_name);
        grid[day][msg.calendar.hour as usize % 24] += 1;
    }

    let rows: Vec<usize> = (0..7).filter(|&d| grid[d].iter().any(|&c| c > 0)).collect();
    let cols: Vec<usize> = (0..24).filter(|&h| grid.iter().any(|row| row[h] > 0)).collect();

    Heatmap {
        days: rows.iter().map(|&d| DAY_NAMES[d]).collect(),
        buckets: cols.iter().map(|&h| hour_bucket(h as u32)).collect(),
        cells: rows
            .iter()
            .map(|&d| cols.iter().map(|&h| grid[d][h]).collect())
            .collect(),
    }
}

fn weekday_index(day_name: &str) -> usize {
    DAY_NAMES
        .iter()
        .position(|d| *d == day_name)
        .unwrap_or_default()
}
