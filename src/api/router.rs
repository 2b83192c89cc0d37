use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::{employees, holidays, middleware::AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/holidays", get(holidays::list_holidays))
        .route("/holidays", post(holidays::create_holiday))
        .route("/holidays", put(holidays::update_holiday))
        .route("/holidays/:id", delete(holidays::delete_holiday))
        .route("/employees", get(employees::list_employees))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
