use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback color for locations without one and for empty calendar days.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Palette offered by the manage view; also used to backfill locations
/// stored before colors existed (index mod palette length).
pub const COLOR_PALETTE: [&str; 10] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
    "#F97316", "#6366F1",
];

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub completed: bool,
    pub mandatory: bool,
}

/// A recorded visit. Dates are `YYYY-MM-DD` strings, matching the slot
/// files on disk; `location_id` is a soft reference that may dangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: String,
    pub date: String,
    pub location_id: String,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub checklist_items: Vec<ChecklistItem>,
}

/// A future-dated intent to visit, convertible into a [`CheckIn`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedCheckIn {
    pub id: String,
    pub date: String,
    pub location_id: String,
    #[serde(default)]
    pub notes: String,
}

/// Checklist attached to a fresh audit form.
pub fn default_checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem {
            id: "fill-audit".into(),
            label: "Fill Audit".into(),
            completed: false,
            mandatory: true,
        },
        ChecklistItem {
            id: "check-locks".into(),
            label: "Check Locks".into(),
            completed: false,
            mandatory: false,
        },
        ChecklistItem {
            id: "verify-signage".into(),
            label: "Verify Signage".into(),
            completed: false,
            mandatory: false,
        },
    ]
}

/// Single-item checklist attached when a planned check-in is converted.
/// The item starts completed so the conversion satisfies the same
/// invariant the audit form enforces.
pub fn converted_checklist() -> Vec<ChecklistItem> {
    vec![ChecklistItem {
        id: "fill-audit".into(),
        label: "Fill Audit".into(),
        completed: true,
        mandatory: true,
    }]
}

/// Labels of mandatory items that are still unchecked.
pub fn incomplete_mandatory(items: &[ChecklistItem]) -> Vec<&str> {
    items
        .iter()
        .filter(|item| item.mandatory && !item.completed)
        .map(|item| item.label.as_str())
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCheckIn {
    pub date: String,
    pub location_id: String,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub checklist_items: Vec<ChecklistItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCheckIn {
    pub date: String,
    pub location_id: String,
    #[serde(default)]
    pub observations: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleChecklistItem {
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlannedCheckIn {
    pub date: String,
    pub location_id: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Excess,
    Missing,
}

/// One completeness alert per period whose check-in count deviates from
/// the expected count.
#[derive(Debug, Clone, Serialize)]
pub struct CompletenessAlert {
    pub period: String,
    pub expected: usize,
    pub actual: usize,
    pub status: AlertStatus,
}

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub weekly: Vec<CompletenessAlert>,
    pub monthly: Vec<CompletenessAlert>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: String,
    pub day: u32,
    pub check_ins: usize,
    pub planned: usize,
    pub color: String,
    pub is_today: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
    pub prev_year: i32,
    pub prev_month: u32,
    pub next_year: i32,
    pub next_month: u32,
}
