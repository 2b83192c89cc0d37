pub mod employees;
pub mod holidays;
pub mod middleware;
pub mod router;

pub use middleware::*;
