pub mod error;

pub use error::*;

use crate::{database::Database, services::HolidayService};

#[derive(Clone)]
pub struct AppState {
    pub holiday_service: HolidayService,
    pub db: Database,
}
