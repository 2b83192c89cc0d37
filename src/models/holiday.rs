use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::employee::is_valid_employee_id;

/// Booking status. The scheduling engine stores the value but never decides
/// it; transitions are owned by the client workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayStatus {
    Draft,
    Requested,
    Scheduled,
    Archived,
}

impl HolidayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayStatus::Draft => "DRAFT",
            HolidayStatus::Requested => "REQUESTED",
            HolidayStatus::Scheduled => "SCHEDULED",
            HolidayStatus::Archived => "ARCHIVED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(HolidayStatus::Draft),
            "REQUESTED" => Some(HolidayStatus::Requested),
            "SCHEDULED" => Some(HolidayStatus::Scheduled),
            "ARCHIVED" => Some(HolidayStatus::Archived),
            _ => None,
        }
    }
}

/// Canonical holiday booking. One shape in memory; `HolidayDto` is the only
/// wire-facing variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: Uuid,
    pub label: String,
    pub employee_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: HolidayStatus,
}

impl Holiday {
    /// Create a new holiday with a freshly assigned identifier
    pub fn new(
        label: String,
        employee_id: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        status: HolidayStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            employee_id,
            start,
            end,
            status,
        }
    }
}

// ========== DTOs (Data Transfer Objects) ==========

/// Wire representation of a holiday. All fields are optional strings so that
/// structural validation can report every missing or malformed field at once
/// instead of failing at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_id: Option<String>,
    pub holiday_label: Option<String>,
    pub employee_id: Option<String>,
    pub start_of_holiday: Option<String>,
    pub end_of_holiday: Option<String>,
    pub status: Option<String>,
}

/// A structurally valid candidate booking, ready for rule evaluation.
/// `id` is present on update, absent on create.
#[derive(Debug, Clone)]
pub struct HolidayCandidate {
    pub id: Option<Uuid>,
    pub label: String,
    pub employee_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: HolidayStatus,
}

/// Fixed message for unparseable instants. The parser diagnostic is never
/// surfaced to the caller.
pub const MALFORMED_INSTANT: &str = "DateTime format is wrong";

impl HolidayDto {
    /// Structural validation. Returns the parsed candidate or the full list
    /// of `"<field> <reason>"` errors. `require_id` is set on update.
    pub fn validate(&self, require_id: bool) -> Result<HolidayCandidate, Vec<String>> {
        let mut errors = Vec::new();

        let id = match (&self.holiday_id, require_id) {
            (Some(raw), true) => match Uuid::parse_str(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push("holidayId must be a valid UUID".to_string());
                    None
                }
            },
            (None, true) => {
                errors.push("holidayId must not be null".to_string());
                None
            }
            // Ids are server-assigned; whatever the client sent on create
            // is ignored
            (_, false) => None,
        };

        let label = match &self.holiday_label {
            Some(l) if !l.trim().is_empty() => Some(l.clone()),
            Some(_) => {
                errors.push("holidayLabel must not be empty".to_string());
                None
            }
            None => {
                errors.push("holidayLabel must not be null".to_string());
                None
            }
        };

        let employee_id = match &self.employee_id {
            Some(id) if is_valid_employee_id(id) => Some(id.clone()),
            Some(_) => {
                errors.push("employeeId must match ^klm[0-9]{6}$".to_string());
                None
            }
            None => {
                errors.push("employeeId must not be null".to_string());
                None
            }
        };

        let start = parse_instant(self.start_of_holiday.as_deref(), "startOfHoliday", &mut errors);
        let end = parse_instant(self.end_of_holiday.as_deref(), "endOfHoliday", &mut errors);

        let status = match &self.status {
            Some(s) => match HolidayStatus::parse(s) {
                Some(status) => Some(status),
                None => {
                    errors.push(
                        "status must be one of DRAFT, REQUESTED, SCHEDULED, ARCHIVED".to_string(),
                    );
                    None
                }
            },
            None => {
                errors.push("status must not be null".to_string());
                None
            }
        };

        match (label, employee_id, start, end, status) {
            (Some(label), Some(employee_id), Some(start), Some(end), Some(status))
                if errors.is_empty() =>
            {
                Ok(HolidayCandidate {
                    id,
                    label,
                    employee_id,
                    start,
                    end,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_instant(
    raw: Option<&str>,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<DateTime<Utc>> {
    match raw {
        Some(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(_) => {
                errors.push(MALFORMED_INSTANT.to_string());
                None
            }
        },
        None => {
            errors.push(format!("{} must not be null", field));
            None
        }
    }
}

impl From<Holiday> for HolidayDto {
    fn from(holiday: Holiday) -> Self {
        Self {
            holiday_id: Some(holiday.id.to_string()),
            holiday_label: Some(holiday.label),
            employee_id: Some(holiday.employee_id),
            start_of_holiday: Some(holiday.start.to_rfc3339()),
            end_of_holiday: Some(holiday.end.to_rfc3339()),
            status: Some(holiday.status.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> HolidayDto {
        HolidayDto {
            holiday_id: None,
            holiday_label: Some("Summer Vacation".to_string()),
            employee_id: Some("klm012345".to_string()),
            start_of_holiday: Some("2025-06-01T00:00:00Z".to_string()),
            end_of_holiday: Some("2025-06-10T00:00:00Z".to_string()),
            status: Some("DRAFT".to_string()),
        }
    }

    #[test]
    fn test_valid_create_dto() {
        let candidate = dto().validate(false).unwrap();
        assert!(candidate.id.is_none());
        assert_eq!(candidate.label, "Summer Vacation");
        assert_eq!(candidate.employee_id, "klm012345");
        assert_eq!(candidate.status, HolidayStatus::Draft);
        assert!(candidate.start < candidate.end);
    }

    #[test]
    fn test_update_requires_id() {
        let errors = dto().validate(true).unwrap_err();
        assert!(errors.iter().any(|e| e.starts_with("holidayId")));
    }

    #[test]
    fn test_client_supplied_id_ignored_on_create() {
        let mut d = dto();
        d.holiday_id = Some(Uuid::new_v4().to_string());
        let candidate = d.validate(false).unwrap();
        assert!(candidate.id.is_none());

        // Even an unparseable id is ignored on create
        d.holiday_id = Some("not-a-uuid".to_string());
        assert!(d.validate(false).unwrap().id.is_none());
    }

    #[test]
    fn test_malformed_instant_uses_fixed_message() {
        let mut d = dto();
        d.start_of_holiday = Some("June 1st 2025".to_string());
        let errors = d.validate(false).unwrap_err();
        assert_eq!(errors, vec![MALFORMED_INSTANT.to_string()]);
    }

    #[test]
    fn test_all_missing_fields_reported_at_once() {
        let d = HolidayDto {
            holiday_id: None,
            holiday_label: None,
            employee_id: None,
            start_of_holiday: None,
            end_of_holiday: None,
            status: None,
        };
        let errors = d.validate(false).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().all(|e| e.contains("must not be null")));
    }

    #[test]
    fn test_bad_employee_id_pattern() {
        let mut d = dto();
        d.employee_id = Some("KLM12".to_string());
        let errors = d.validate(false).unwrap_err();
        assert!(errors.iter().any(|e| e.starts_with("employeeId")));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let mut d = dto();
        d.status = Some("PENDING".to_string());
        let errors = d.validate(false).unwrap_err();
        assert!(errors.iter().any(|e| e.starts_with("status")));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            HolidayStatus::Draft,
            HolidayStatus::Requested,
            HolidayStatus::Scheduled,
            HolidayStatus::Archived,
        ] {
            assert_eq!(HolidayStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(HolidayStatus::parse("draft"), None);
    }
}
