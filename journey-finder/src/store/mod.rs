//! Train storage.
//!
//! Holds the collection of known trains, in memory and optionally backed
//! by a JSON file, and the sample timetable used to seed it.

mod error;
mod seed;
mod trains;

pub use error::StoreError;
pub use seed::{load_sample_data, sample_trains};
pub use trains::TrainStore;
