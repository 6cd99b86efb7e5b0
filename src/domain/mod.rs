pub mod calendar;
pub mod lineup;
pub mod models;
pub mod validation;

pub use calendar::{NewScheduledMatch, ScheduledMatch};
pub use lineup::{LineupBuilder, LineupError, POSITIONS};
pub use models::*;
pub use validation::{validate_match, validate_template, ValidationError};
