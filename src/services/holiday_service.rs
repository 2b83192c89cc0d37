use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{Holiday, HolidayCandidate, HolidayDto},
    services::clock::{Clock, SystemClock},
    services::scheduling,
};

/// Booking service: runs the scheduling rules against the store snapshot and
/// performs at most one write per request, only after every applicable check
/// passed.
#[derive(Clone)]
pub struct HolidayService {
    db: Database,
    clock: Arc<dyn Clock>,
    // Serializes check-then-act across requests. The overlap rule is global,
    // so a per-employee lock would not be enough.
    write_lock: Arc<Mutex<()>>,
}

impl HolidayService {
    pub fn new(db: Database) -> Self {
        Self::with_clock(db, Arc::new(SystemClock))
    }

    pub fn with_clock(db: Database, clock: Arc<dyn Clock>) -> Self {
        Self {
            db,
            clock,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All holidays owned by an employee, in store order
    pub async fn get_holidays(&self, employee_id: &str) -> ApiResult<Vec<Holiday>> {
        self.db.list_holidays_by_employee(employee_id).await
    }

    /// Validate and persist a new booking, assigning a fresh identifier
    pub async fn create_holiday(&self, dto: HolidayDto) -> ApiResult<Holiday> {
        let candidate = dto.validate(false).map_err(ApiError::Validation)?;

        let _guard = self.write_lock.lock().await;

        self.check_rules(&candidate, None).await?;

        self.db
            .get_employee(&candidate.employee_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Employee {} not found", candidate.employee_id))
            })?;

        let holiday = Holiday::new(
            candidate.label,
            candidate.employee_id,
            candidate.start,
            candidate.end,
            candidate.status,
        );
        self.db.create_holiday(&holiday).await?;

        tracing::info!(
            "Created holiday {} for employee {}",
            holiday.id,
            holiday.employee_id
        );
        Ok(holiday)
    }

    /// Re-validate the proposed values and overwrite the stored record.
    /// The record's own id is excluded from the overlap and gap scans so a
    /// date-preserving update does not collide with itself.
    pub async fn update_holiday(&self, dto: HolidayDto) -> ApiResult<Holiday> {
        let candidate = dto.validate(true).map_err(ApiError::Validation)?;
        let id = candidate
            .id
            .ok_or_else(|| ApiError::Internal("validated update without an id".to_string()))?;

        let _guard = self.write_lock.lock().await;

        self.db
            .get_holiday(&id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Holiday {} not found", id)))?;

        self.check_rules(&candidate, Some(id)).await?;

        self.db
            .get_employee(&candidate.employee_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Employee {} not found", candidate.employee_id))
            })?;

        let holiday = Holiday {
            id,
            label: candidate.label,
            employee_id: candidate.employee_id,
            start: candidate.start,
            end: candidate.end,
            status: candidate.status,
        };
        self.db.update_holiday(&holiday).await?;

        tracing::info!(
            "Updated holiday {} for employee {}",
            holiday.id,
            holiday.employee_id
        );
        Ok(holiday)
    }

    /// Cancel a booking, subject to the cancellation lead-time rule
    pub async fn delete_holiday(&self, id: Uuid) -> ApiResult<()> {
        let _guard = self.write_lock.lock().await;

        let holiday = self
            .db
            .get_holiday(&id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Holiday {} not found", id)))?;

        scheduling::check_cancellation(self.clock.now(), holiday.start)?;

        self.db.delete_holiday(&id).await?;

        tracing::info!("Cancelled holiday {}", id);
        Ok(())
    }

    /// Rule sequence shared by create and update: lead time, then overlap
    /// against every holiday in the store, then the gap rule against the
    /// employee's own holidays. First failure aborts; nothing is written.
    async fn check_rules(
        &self,
        candidate: &HolidayCandidate,
        exclude: Option<Uuid>,
    ) -> ApiResult<()> {
        let now = self.clock.now();
        let all = self.db.list_holidays().await?;
        let own = self
            .db
            .list_holidays_by_employee(&candidate.employee_id)
            .await?;

        let checks = scheduling::check_lead_time(now, candidate.start)
            .and_then(|_| scheduling::check_no_overlap(candidate.start, candidate.end, &all, exclude))
            .and_then(|_| scheduling::check_gap(candidate.start, candidate.end, &own, exclude));

        if let Err(violation) = checks {
            tracing::warn!(
                "Rejected holiday for employee {}: {}",
                candidate.employee_id,
                violation
            );
            return Err(violation.into());
        }

        Ok(())
    }
}
