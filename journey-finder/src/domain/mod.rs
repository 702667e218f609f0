//! Domain types for the journey finder.
//!
//! This module contains the core domain model types that represent
//! validated timetable data and the journeys derived from it. Types enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod error;
mod fare;
mod journey;
mod leg;
mod station;
mod time;
mod train;

pub use error::DomainError;
pub use fare::{Fare, PRICE_PER_KM_HUNDREDTHS};
pub use journey::{Journey, JourneyKind};
pub use leg::Leg;
pub use station::names_match;
pub use time::{ClockTime, TimeError};
pub use train::{Stop, Train};
