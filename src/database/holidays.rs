use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, Row};
use uuid::Uuid;

use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{Holiday, HolidayStatus},
};

impl Database {
    /// Insert a new holiday
    pub async fn create_holiday(&self, holiday: &Holiday) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO holidays (id, label, employee_id, start_of_holiday, end_of_holiday, status)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(holiday.id.to_string())
        .bind(&holiday.label)
        .bind(&holiday.employee_id)
        .bind(holiday.start.to_rfc3339())
        .bind(holiday.end.to_rfc3339())
        .bind(holiday.status.as_str())
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Get a holiday by ID
    pub async fn get_holiday(&self, id: &Uuid) -> ApiResult<Option<Holiday>> {
        let row = sqlx::query(
            "SELECT id, label, employee_id, start_of_holiday, end_of_holiday, status
             FROM holidays WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool())
        .await?;

        row.map(row_to_holiday).transpose()
    }

    /// Get all holidays, feeding the global overlap check
    pub async fn list_holidays(&self) -> ApiResult<Vec<Holiday>> {
        let rows = sqlx::query(
            "SELECT id, label, employee_id, start_of_holiday, end_of_holiday, status
             FROM holidays ORDER BY start_of_holiday ASC",
        )
        .fetch_all(self.pool())
        .await?;

        rows.into_iter().map(row_to_holiday).collect()
    }

    /// Get all holidays owned by an employee
    pub async fn list_holidays_by_employee(&self, employee_id: &str) -> ApiResult<Vec<Holiday>> {
        let rows = sqlx::query(
            "SELECT id, label, employee_id, start_of_holiday, end_of_holiday, status
             FROM holidays WHERE employee_id = ? ORDER BY start_of_holiday ASC",
        )
        .bind(employee_id)
        .fetch_all(self.pool())
        .await?;

        rows.into_iter().map(row_to_holiday).collect()
    }

    /// Full overwrite of an existing holiday; the id never changes
    pub async fn update_holiday(&self, holiday: &Holiday) -> ApiResult<()> {
        sqlx::query(
            "UPDATE holidays
             SET label = ?, employee_id = ?, start_of_holiday = ?, end_of_holiday = ?, status = ?
             WHERE id = ?",
        )
        .bind(&holiday.label)
        .bind(&holiday.employee_id)
        .bind(holiday.start.to_rfc3339())
        .bind(holiday.end.to_rfc3339())
        .bind(holiday.status.as_str())
        .bind(holiday.id.to_string())
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Delete a holiday by ID; returns false when no row matched
    pub async fn delete_holiday(&self, id: &Uuid) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM holidays WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_holiday(row: AnyRow) -> ApiResult<Holiday> {
    let id: String = row.get("id");
    let start: String = row.get("start_of_holiday");
    let end: String = row.get("end_of_holiday");
    let status: String = row.get("status");

    Ok(Holiday {
        id: Uuid::parse_str(&id)
            .map_err(|_| ApiError::Internal(format!("Corrupt holiday id: {}", id)))?,
        label: row.get("label"),
        employee_id: row.get("employee_id"),
        start: parse_stored_instant(&start)?,
        end: parse_stored_instant(&end)?,
        status: HolidayStatus::parse(&status)
            .ok_or_else(|| ApiError::Internal(format!("Corrupt holiday status: {}", status)))?,
    })
}

fn parse_stored_instant(raw: &str) -> ApiResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ApiError::Internal(format!("Corrupt holiday instant: {}", raw)))
}
