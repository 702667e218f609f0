//! Index lookups over a train's route.
//!
//! Routes are short, so every lookup is a linear scan; nothing is memoised
//! between calls.

use crate::domain::{Stop, names_match};

/// Find the first stop on `route` calling at `station`, ignoring case.
pub fn station_index(route: &[Stop], station: &str) -> Option<usize> {
    route
        .iter()
        .position(|stop| names_match(&stop.station_name, station))
}

/// Total track distance travelled from stop `start` to stop `end`.
///
/// Sums `distance_from_previous` over stops `start + 1 ..= end` in `u64`,
/// so no route of `u32` hops can overflow it. Returns 0 when `end <= start`.
pub fn distance_between(route: &[Stop], start: usize, end: usize) -> u64 {
    if end <= start {
        return 0;
    }
    route
        .iter()
        .take(end + 1)
        .skip(start + 1)
        .map(|stop| u64::from(stop.distance_from_previous))
        .sum()
}
