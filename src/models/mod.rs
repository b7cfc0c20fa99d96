pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod filters;
mod form_field;
pub mod patient;

pub use appointment::*;
pub use doctor::*;
pub use enums::*;
pub use filters::*;
pub use patient::*;
