//! Optional ordering of search results.
//!
//! The search returns journeys in discovery order. Callers that want them
//! ordered for display ask for one of these orderings explicitly.

use std::fmt;

use serde::Deserialize;

use crate::domain::Journey;

/// How to order journeys for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Cheapest first
    Fare,
    /// Earliest final arrival first
    #[serde(alias = "time")]
    Arrival,
    /// Direct journeys before connecting ones
    Type,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOrder::Fare => "fare",
            SortOrder::Arrival => "arrival",
            SortOrder::Type => "type",
        };
        f.write_str(name)
    }
}

/// Sort journeys by the given order.
///
/// The sort is stable: journeys that compare equal keep their discovery
/// order. Arrival compares time of day only.
pub fn sort_journeys(mut journeys: Vec<Journey>, order: SortOrder) -> Vec<Journey> {
    match order {
        SortOrder::Fare => journeys.sort_by_key(Journey::total_price),
        SortOrder::Arrival => journeys.sort_by_key(Journey::final_arrival_time),
        SortOrder::Type => journeys.sort_by_key(Journey::kind),
    }
    journeys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, JourneyKind, Leg};

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn leg(train: &str, from: &str, dep: &str, to: &str, arr: &str, km: u64) -> Leg {
        Leg::new(train, from, time(dep), to, time(arr), km)
    }

    /// Connecting (cheap, early), direct (dear, late), direct (mid, mid).
    fn journeys() -> Vec<Journey> {
        vec![
            Journey::connecting(
                leg("A", "X", "05:00", "Y", "06:00", 10),
                leg("B", "Y", "06:10", "Z", "07:00", 10),
            ),
            Journey::direct(leg("C", "X", "06:00", "Z", "12:00", 400)),
            Journey::direct(leg("D", "X", "07:00", "Z", "09:00", 100)),
        ]
    }

    fn trains(journeys: &[Journey]) -> Vec<&str> {
        journeys.iter().map(|j| j.first_leg().train_name()).collect()
    }

    #[test]
    fn sort_by_fare() {
        let sorted = sort_journeys(journeys(), SortOrder::Fare);
        assert_eq!(trains(&sorted), vec!["A", "D", "C"]);
    }

    #[test]
    fn sort_by_arrival() {
        let sorted = sort_journeys(journeys(), SortOrder::Arrival);
        assert_eq!(trains(&sorted), vec!["A", "D", "C"]);
        assert_eq!(sorted[2].final_arrival_time(), time("12:00"));
    }

    #[test]
    fn sort_by_type_is_stable() {
        let sorted = sort_journeys(journeys(), SortOrder::Type);
        assert_eq!(trains(&sorted), vec!["C", "D", "A"]);
        assert_eq!(sorted[2].kind(), JourneyKind::Connecting);
    }

    #[test]
    fn sort_empty() {
        assert!(sort_journeys(Vec::new(), SortOrder::Fare).is_empty());
    }

    #[test]
    fn deserialise_sort_order() {
        let parse = |s: &str| serde_json::from_str::<SortOrder>(&format!("\"{s}\""));
        assert_eq!(parse("fare").unwrap(), SortOrder::Fare);
        assert_eq!(parse("arrival").unwrap(), SortOrder::Arrival);
        assert_eq!(parse("time").unwrap(), SortOrder::Arrival);
        assert_eq!(parse("type").unwrap(), SortOrder::Type);
        assert!(parse("duration").is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(SortOrder::Fare.to_string(), "fare");
        assert_eq!(SortOrder::Arrival.to_string(), "arrival");
        assert_eq!(SortOrder::Type.to_string(), "type");
    }
}
