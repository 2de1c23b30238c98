use crate::calendar::month_grid;
use crate::errors::AppError;
use crate::export::export_check_ins;
use crate::models::{
    incomplete_mandatory, new_id, AlertsResponse, CheckIn, EditCheckIn, Location, MonthGrid,
    NewCheckIn, NewLocation, NewPlannedCheckIn, PlannedCheckIn, ToggleChecklistItem, DEFAULT_COLOR,
};
use crate::state::AppState;
use crate::stats::{monthly_completeness, weekly_completeness};
use crate::storage::{persist_slot, CHECK_INS_SLOT, LOCATIONS_SLOT, PLANNED_SLOT};
use crate::ui;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;

pub async fn home_page() -> Html<String> {
    Html(ui::render_home(&today_string()))
}

pub async fn plan_page() -> Html<String> {
    Html(ui::render_plan(&today_string()))
}

pub async fn manage_page() -> Html<String> {
    Html(ui::render_manage())
}

pub async fn overview_page() -> Html<String> {
    Html(ui::render_overview(&today_string()))
}

pub async fn list_locations(State(state): State<AppState>) -> Json<Vec<Location>> {
    let store = state.store.lock().await;
    Json(store.locations.clone())
}

pub async fn create_location(
    State(state): State<AppState>,
    Json(payload): Json<NewLocation>,
) -> Result<Json<Location>, AppError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("Location name is required"));
    }

    let mut store = state.store.lock().await;
    let location = store.add_location(name, normalize_color(&payload.color));
    persist_slot(&state.data_dir, LOCATIONS_SLOT, &store.locations).await?;
    Ok(Json(location))
}

pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewLocation>,
) -> Result<StatusCode, AppError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("Location name is required"));
    }

    let mut store = state.store.lock().await;
    if !store.update_location(&id, name, normalize_color(&payload.color)) {
        return Err(AppError::not_found("Location not found"));
    }
    persist_slot(&state.data_dir, LOCATIONS_SLOT, &store.locations).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    if !store.remove_location(&id) {
        return Err(AppError::not_found("Location not found"));
    }
    persist_slot(&state.data_dir, LOCATIONS_SLOT, &store.locations).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_check_ins(State(state): State<AppState>) -> Json<Vec<CheckIn>> {
    let store = state.store.lock().await;
    Json(store.check_ins.clone())
}

pub async fn create_check_in(
    State(state): State<AppState>,
    Json(payload): Json<NewCheckIn>,
) -> Result<Json<CheckIn>, AppError> {
    let date = parse_date(&payload.date)?;
    if payload.location_id.trim().is_empty() {
        return Err(AppError::bad_request("Please select a location"));
    }
    if date > today() {
        return Err(AppError::bad_request(
            "Cannot check-in for future dates. Please select today or a past date.",
        ));
    }
    let incomplete = incomplete_mandatory(&payload.checklist_items);
    if !incomplete.is_empty() {
        return Err(AppError::bad_request(format!(
            "Please complete all mandatory checklist items: {}",
            incomplete.join(", "),
        )));
    }

    let mut store = state.store.lock().await;
    let check_in = store.add_check_in(CheckIn {
        id: new_id(),
        date: payload.date,
        location_id: payload.location_id,
        observations: payload.observations,
        checklist_items: payload.checklist_items,
    });
    persist_slot(&state.data_dir, CHECK_INS_SLOT, &store.check_ins).await?;
    Ok(Json(check_in))
}

/// Edits replace date/location/observations in place; the creation-time
/// invariants (no future date, mandatory checklist) are not re-checked.
pub async fn update_check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EditCheckIn>,
) -> Result<StatusCode, AppError> {
    parse_date(&payload.date)?;
    if payload.location_id.trim().is_empty() {
        return Err(AppError::bad_request("Please select a location"));
    }

    let mut store = state.store.lock().await;
    if !store.update_check_in(&id, payload.date, payload.location_id, payload.observations) {
        return Err(AppError::not_found("Check-in not found"));
    }
    persist_slot(&state.data_dir, CHECK_INS_SLOT, &store.check_ins).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    if !store.remove_check_in(&id) {
        return Err(AppError::not_found("Check-in not found"));
    }
    persist_slot(&state.data_dir, CHECK_INS_SLOT, &store.check_ins).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_checklist_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(payload): Json<ToggleChecklistItem>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    if !store.set_checklist_item(&id, &item_id, payload.completed) {
        return Err(AppError::not_found("Checklist item not found"));
    }
    persist_slot(&state.data_dir, CHECK_INS_SLOT, &store.check_ins).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_planned(State(state): State<AppState>) -> Json<Vec<PlannedCheckIn>> {
    let store = state.store.lock().await;
    Json(store.planned_check_ins.clone())
}

pub async fn create_planned(
    State(state): State<AppState>,
    Json(payload): Json<NewPlannedCheckIn>,
) -> Result<Json<PlannedCheckIn>, AppError> {
    let date = parse_date(&payload.date)?;
    if payload.location_id.trim().is_empty() {
        return Err(AppError::bad_request("Please select a location"));
    }
    if date < today() {
        return Err(AppError::bad_request(
            "Cannot plan check-ins for past dates. Please select today or a future date.",
        ));
    }

    let mut store = state.store.lock().await;
    let planned = store.add_planned(PlannedCheckIn {
        id: new_id(),
        date: payload.date,
        location_id: payload.location_id,
        notes: payload.notes,
    });
    persist_slot(&state.data_dir, PLANNED_SLOT, &store.planned_check_ins).await?;
    Ok(Json(planned))
}

pub async fn delete_planned(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    if !store.remove_planned(&id) {
        return Err(AppError::not_found("Planned check-in not found"));
    }
    persist_slot(&state.data_dir, PLANNED_SLOT, &store.planned_check_ins).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Applies the planned-to-actual transition in memory, then commits both
/// touched slots. The slot writes are still two independent files; a
/// crash between them surfaces as either a duplicated or a lost record
/// on next load.
pub async fn convert_planned(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CheckIn>, AppError> {
    let mut store = state.store.lock().await;
    let check_in = store
        .convert_planned(&id)
        .ok_or_else(|| AppError::not_found("Planned check-in not found"))?;
    persist_slot(&state.data_dir, CHECK_INS_SLOT, &store.check_ins).await?;
    persist_slot(&state.data_dir, PLANNED_SLOT, &store.planned_check_ins).await?;
    Ok(Json(check_in))
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<MonthGrid>, AppError> {
    let today = today();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::bad_request(format!("Invalid month: {year}-{month}")))?;

    let store = state.store.lock().await;
    Ok(Json(month_grid(first_day, &store, today)))
}

pub async fn alerts(State(state): State<AppState>) -> Json<AlertsResponse> {
    let store = state.store.lock().await;
    let location_count = store.locations.len();
    Json(AlertsResponse {
        weekly: weekly_completeness(&store.check_ins, location_count),
        monthly: monthly_completeness(&store.check_ins, location_count),
    })
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub async fn export_csv(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let from = parse_optional_date(query.from.as_deref(), "from")?;
    let to = parse_optional_date(query.to.as_deref(), "to")?;

    let store = state.store.lock().await;
    let export = export_check_ins(&store, from, to, today())?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ),
    ];
    Ok((headers, export.content))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn today_string() -> String {
    today().to_string()
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("Invalid date: {value}")))
}

/// Empty and missing query values both mean "no bound"; HTML date inputs
/// submit empty strings when untouched.
fn parse_optional_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::bad_request(format!("Invalid {field} date: {raw}"))),
    }
}

/// Accepts `#rrggbb`; anything else falls back to the default color.
fn normalize_color(color: &str) -> String {
    let color = color.trim();
    let is_hex = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_hex {
        color.to_string()
    } else {
        DEFAULT_COLOR.to_string()
    }
}
