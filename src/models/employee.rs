use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Crew member that owns holiday bookings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
}

/// Employee ids follow the crew badge format: `klm` plus six digits
pub fn is_valid_employee_id(id: &str) -> bool {
    static EMPLOYEE_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMPLOYEE_ID_REGEX
        .get_or_init(|| Regex::new(r"^klm[0-9]{6}$").expect("Invalid employee id regex"));
    re.is_match(id)
}
