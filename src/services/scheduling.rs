use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::Holiday;

/// Minimum number of days between "now" and a holiday's start for
/// create, update and cancel to be permitted
pub const LEAD_TIME_DAYS: i64 = 5;

/// Minimum separation between two of the same employee's bookings
pub const MIN_GAP_DAYS: i64 = 3;

/// A scheduling rule rejected the request. Display strings are the exact
/// user-visible messages; they map to HTTP 400 at the API boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Start of holiday must be at least 5 days from today.")]
    StartDate,
    #[error("Holidays must not overlap.")]
    Overlap,
    #[error("There should be a gap of at least 3 working days between holidays")]
    Gap,
    #[error("A holiday must be cancelled at least 5 working days before the start date.")]
    Cancellation,
}

/// Lead-time rule: the start must be strictly more than `LEAD_TIME_DAYS`
/// after the evaluation instant.
pub fn check_lead_time(now: DateTime<Utc>, start: DateTime<Utc>) -> Result<(), RuleViolation> {
    if now + Duration::days(LEAD_TIME_DAYS) < start {
        Ok(())
    } else {
        Err(RuleViolation::StartDate)
    }
}

/// Overlap rule: the candidate range must not touch any existing booking,
/// regardless of employee. Boundary-inclusive on both ends, so ranges that
/// merely share an endpoint still count as overlapping.
///
/// The employee-agnostic scope is intentional source behavior (no two crew
/// bookings anywhere may coincide); see DESIGN.md. `exclude` skips the
/// record being updated.
pub fn check_no_overlap(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    existing: &[Holiday],
    exclude: Option<Uuid>,
) -> Result<(), RuleViolation> {
    let conflict = existing
        .iter()
        .filter(|h| Some(h.id) != exclude)
        .any(|h| h.start <= end && start <= h.end);

    if conflict {
        Err(RuleViolation::Overlap)
    } else {
        Ok(())
    }
}

/// Gap rule: each of the employee's own bookings must sit at least
/// `MIN_GAP_DAYS` whole days away from the candidate on whichever side it
/// falls. A negative day-count means the existing booking is on the other
/// side (or overlaps, which the overlap rule owns) and never fails here.
pub fn check_gap(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    own_holidays: &[Holiday],
    exclude: Option<Uuid>,
) -> Result<(), RuleViolation> {
    let too_close = own_holidays
        .iter()
        .filter(|h| Some(h.id) != exclude)
        .any(|h| {
            let gap_before = (start - h.end).num_days();
            let gap_after = (h.start - end).num_days();

            (0..MIN_GAP_DAYS).contains(&gap_before) || (0..MIN_GAP_DAYS).contains(&gap_after)
        });

    if too_close {
        Err(RuleViolation::Gap)
    } else {
        Ok(())
    }
}

/// Cancellation rule: same inequality as the lead-time check, evaluated
/// against the stored booking's start.
pub fn check_cancellation(now: DateTime<Utc>, start: DateTime<Utc>) -> Result<(), RuleViolation> {
    if now + Duration::days(LEAD_TIME_DAYS) < start {
        Ok(())
    } else {
        Err(RuleViolation::Cancellation)
    }
}
