pub mod clock;
pub mod holiday_service;
pub mod scheduling;

pub use clock::*;
pub use holiday_service::*;
pub use scheduling::*;
