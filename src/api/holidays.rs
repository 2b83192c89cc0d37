use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::middleware::{ApiError, ApiResult, AppState},
    models::HolidayDto,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQuery {
    pub employee_id: String,
}

/// GET /holidays?employeeId= - List an employee's holidays
pub async fn list_holidays(
    State(state): State<AppState>,
    Query(params): Query<EmployeeQuery>,
) -> ApiResult<Json<Vec<HolidayDto>>> {
    let holidays = state.holiday_service.get_holidays(&params.employee_id).await?;

    Ok(Json(holidays.into_iter().map(HolidayDto::from).collect()))
}

/// POST /holidays - Book a new holiday
pub async fn create_holiday(
    State(state): State<AppState>,
    Json(dto): Json<HolidayDto>,
) -> ApiResult<(StatusCode, Json<HolidayDto>)> {
    let holiday = state.holiday_service.create_holiday(dto).await?;

    Ok((StatusCode::CREATED, Json(HolidayDto::from(holiday))))
}

/// PUT /holidays - Replace an existing holiday.
/// Replies 201; clients depend on create and update sharing a status code.
pub async fn update_holiday(
    State(state): State<AppState>,
    Json(dto): Json<HolidayDto>,
) -> ApiResult<(StatusCode, Json<HolidayDto>)> {
    let holiday = state.holiday_service.update_holiday(dto).await?;

    Ok((StatusCode::CREATED, Json(HolidayDto::from(holiday))))
}

/// DELETE /holidays/:id - Cancel a holiday
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation(vec!["holidayId must be a valid UUID".to_string()]))?;

    state.holiday_service.delete_holiday(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
