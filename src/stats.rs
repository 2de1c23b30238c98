use crate::models::{AlertStatus, CheckIn, CompletenessAlert, PlannedCheckIn, DEFAULT_COLOR};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Visits per location per month assumed by the monthly alert.
pub const MONTHLY_CADENCE: usize = 4;

/// Transparency suffix appended to location colors when a day only has
/// planned entries.
pub const PLANNED_ALPHA: &str = "80";

pub trait Dated {
    fn date(&self) -> &str;
}

impl Dated for CheckIn {
    fn date(&self) -> &str {
        &self.date
    }
}

impl Dated for PlannedCheckIn {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Buckets records by their date string. Every record lands in exactly
/// one bucket and buckets keep the source-array order.
pub fn group_by_date<R: Dated>(records: &[R]) -> BTreeMap<&str, Vec<&R>> {
    let mut buckets: BTreeMap<&str, Vec<&R>> = BTreeMap::new();
    for record in records {
        buckets.entry(record.date()).or_default().push(record);
    }
    buckets
}

/// ISO-8601 week label, e.g. `2024-W23`. Monday-start; the week holding
/// the year's first Thursday is week 1.
pub fn iso_week_of(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// One alert per ISO week whose check-in count differs from the number
/// of configured locations. Weeks without any check-in are never
/// considered, even when locations exist.
pub fn weekly_completeness(check_ins: &[CheckIn], location_count: usize) -> Vec<CompletenessAlert> {
    completeness(check_ins, location_count, |date| {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(iso_week_of)
    })
}

/// One alert per calendar month whose check-in count differs from
/// `location_count * MONTHLY_CADENCE`. Counts every check-in regardless
/// of checklist state; months without check-ins are never considered.
pub fn monthly_completeness(check_ins: &[CheckIn], location_count: usize) -> Vec<CompletenessAlert> {
    completeness(check_ins, location_count * MONTHLY_CADENCE, |date| {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|parsed| format!("{}-{:02}", parsed.year(), parsed.month()))
    })
}

fn completeness(
    check_ins: &[CheckIn],
    expected: usize,
    period_of: impl Fn(&str) -> Option<String>,
) -> Vec<CompletenessAlert> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for check_in in check_ins {
        if let Some(period) = period_of(&check_in.date) {
            *counts.entry(period).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(_, actual)| *actual != expected)
        .map(|(period, actual)| CompletenessAlert {
            status: if actual > expected {
                AlertStatus::Excess
            } else {
                AlertStatus::Missing
            },
            period,
            expected,
            actual,
        })
        .collect()
}

/// Background for one calendar day. Actual check-ins win over planned
/// ones; planned-only days get the transparency suffix; empty days get
/// the default color.
pub fn day_color(
    check_ins: &[&CheckIn],
    planned: &[&PlannedCheckIn],
    mut color_of: impl FnMut(&str) -> String,
) -> String {
    if !check_ins.is_empty() {
        let colors = distinct(check_ins.iter().map(|c| color_of(&c.location_id)));
        return blend(&colors);
    }
    if !planned.is_empty() {
        let colors: Vec<String> = distinct(planned.iter().map(|p| color_of(&p.location_id)))
            .into_iter()
            .map(|color| format!("{color}{PLANNED_ALPHA}"))
            .collect();
        return blend(&colors);
    }
    DEFAULT_COLOR.to_string()
}

fn distinct(colors: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for color in colors {
        if !seen.contains(&color) {
            seen.push(color);
        }
    }
    seen
}

/// Single color stays solid; several become a directional gradient with
/// evenly spaced stops.
fn blend(colors: &[String]) -> String {
    if colors.len() == 1 {
        return colors[0].clone();
    }
    let last = (colors.len() - 1) as f64;
    let stops = colors
        .iter()
        .enumerate()
        .map(|(index, color)| format!("{color} {:.0}%", index as f64 / last * 100.0))
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient(135deg, {stops})")
}
