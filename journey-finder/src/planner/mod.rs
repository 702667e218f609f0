//! Journey planner over a fixed set of trains.
//!
//! This module implements the core search that answers:
//! "How can I get from station A to station B?"
//!
//! Journeys are either direct (one train calls at both stations, in that
//! order) or connecting (one change at a station shared by two trains).
//! Each leg is priced linearly by the track distance it covers.

mod lookup;
mod rank;
mod search;

pub use lookup::{distance_between, station_index};
pub use rank::{SortOrder, sort_journeys};
pub use search::{
    Planner, SearchError, SearchResult, TrainProvider, connecting_journey, direct_journey,
    find_journeys,
};
