//! Direct and one-change journey search.
//!
//! Finds every way to get from one named station to another over a fixed
//! set of trains, either on one train or by changing once at a station both
//! trains call at.

use std::future::Future;

use tracing::{debug, info};

use crate::domain::{Journey, Leg, Train};
use crate::store::StoreError;

use super::lookup::{distance_between, station_index};

/// Error from journey search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The train collection could not be read
    #[error("failed to fetch trains: {0}")]
    Store(#[from] StoreError),
}

/// Result of journey search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found journeys in discovery order: direct first, then connecting.
    pub journeys: Vec<Journey>,

    /// Number of trains in the snapshot that was searched.
    pub trains_searched: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            journeys: Vec::new(),
            trains_searched: 0,
        }
    }
}

/// Trait for providing the train collection.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait TrainProvider {
    /// Fetch every train currently known, reflecting the latest stored state.
    fn fetch_all_trains(&self) -> impl Future<Output = Result<Vec<Train>, StoreError>> + Send;
}

/// Journey planner over a train provider.
///
/// Each search takes a fresh snapshot of the trains and works on it alone.
pub struct Planner<'a, P: TrainProvider> {
    provider: &'a P,
}

impl<'a, P: TrainProvider + Sync> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Search for journeys from `from` to `to`.
    ///
    /// An unknown station or unconnected pair is not an error; it gives an
    /// empty result. Only a failure to read the trains is reported.
    pub async fn find(&self, from: &str, to: &str) -> Result<SearchResult, SearchError> {
        let trains = self.provider.fetch_all_trains().await?;
        debug!(from, to, trains = trains.len(), "searching journeys");

        let journeys = find_journeys(&trains, from, to);

        info!(
            from,
            to,
            found = journeys.len(),
            "journey search complete"
        );

        Ok(SearchResult {
            journeys,
            trains_searched: trains.len(),
        })
    }
}

/// Find all direct and one-change journeys from `from` to `to`.
///
/// Station names are matched ignoring case. Direct journeys come first, in
/// train order. Connecting journeys follow, ordered by first train, then
/// change stop along the first train, then second train. Nothing is
/// deduplicated or sorted.
pub fn find_journeys(trains: &[Train], from: &str, to: &str) -> Vec<Journey> {
    let mut journeys: Vec<Journey> = trains
        .iter()
        .filter_map(|train| direct_journey(train, from, to))
        .collect();

    for first in trains {
        let Some(from_idx) = station_index(first.route(), from) else {
            continue;
        };

        for change in &first.route()[from_idx + 1..] {
            let mid = change.station_name.as_str();
            journeys.extend(
                trains
                    .iter()
                    .filter_map(|second| connecting_journey(first, second, from, mid, to)),
            );
        }
    }

    journeys
}

/// Try to travel from `from` to `to` on a single train.
pub fn direct_journey(train: &Train, from: &str, to: &str) -> Option<Journey> {
    let from_idx = station_index(train.route(), from)?;
    let to_idx = station_index(train.route(), to)?;

    let leg = priced_leg(train, from_idx, to_idx)?;
    Some(Journey::direct(leg))
}

/// Try to travel from `from` to `mid` on `first`, then on to `to` on
/// `second`.
///
/// `first` and `second` may be the same train, and no time is required to
/// make the change.
pub fn connecting_journey(
    first: &Train,
    second: &Train,
    from: &str,
    mid: &str,
    to: &str,
) -> Option<Journey> {
    let from_idx = station_index(first.route(), from)?;
    let first_mid_idx = station_index(first.route(), mid)?;
    let second_mid_idx = station_index(second.route(), mid)?;
    let to_idx = station_index(second.route(), to)?;

    let first_leg = priced_leg(first, from_idx, first_mid_idx)?;
    let second_leg = priced_leg(second, second_mid_idx, to_idx)?;

    debug!(
        first = first.name(),
        second = second.name(),
        change = mid,
        "connection found"
    );

    Some(Journey::connecting(first_leg, second_leg))
}

/// Build the leg riding `train` from stop `board` to stop `alight`.
///
/// Trains only run forwards, and a leg must cover some track.
fn priced_leg(train: &Train, board: usize, alight: usize) -> Option<Leg> {
    if alight <= board {
        return None;
    }

    let route = train.route();
    let distance = distance_between(route, board, alight);
    if distance == 0 {
        return None;
    }

    let board_stop = &route[board];
    let alight_stop = &route[alight];

    Some(Leg::new(
        train.name(),
        board_stop.station_name.as_str(),
        board_stop.departure_time,
        alight_stop.station_name.as_str(),
        alight_stop.departure_time,
        distance,
    ))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
