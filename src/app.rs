use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home_page))
        .route("/plan", get(handlers::plan_page))
        .route("/manage", get(handlers::manage_page))
        .route("/overview", get(handlers::overview_page))
        .route(
            "/api/locations",
            get(handlers::list_locations).post(handlers::create_location),
        )
        .route(
            "/api/locations/:id",
            put(handlers::update_location).delete(handlers::delete_location),
        )
        .route(
            "/api/check-ins",
            get(handlers::list_check_ins).post(handlers::create_check_in),
        )
        .route(
            "/api/check-ins/:id",
            put(handlers::update_check_in).delete(handlers::delete_check_in),
        )
        .route(
            "/api/check-ins/:id/checklist/:item_id",
            put(handlers::toggle_checklist_item),
        )
        .route(
            "/api/planned",
            get(handlers::list_planned).post(handlers::create_planned),
        )
        .route("/api/planned/:id", delete(handlers::delete_planned))
        .route("/api/planned/:id/convert", post(handlers::convert_planned))
        .route("/api/calendar", get(handlers::calendar))
        .route("/api/alerts", get(handlers::alerts))
        .route("/api/export", get(handlers::export_csv))
        .with_state(state)
}
