pub mod employee;
pub mod holiday;

pub use employee::*;
pub use holiday::*;
