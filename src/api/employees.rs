use axum::{extract::State, Json};

use crate::{
    api::middleware::{ApiResult, AppState},
    models::Employee,
};

/// GET /employees - List all employees (read-only, for client pickers)
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.db.list_employees().await?;

    Ok(Json(employees))
}
