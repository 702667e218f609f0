//! Journey types.
//!
//! A `Journey` is a complete trip from origin to destination: either a
//! single train, or two trains with one change at a shared station.

use std::fmt;

use super::{ClockTime, Fare, Leg};

/// Whether a journey needs a change of train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JourneyKind {
    /// One train from origin to destination
    Direct,
    /// Two trains with one change
    Connecting,
}

impl JourneyKind {
    /// Returns the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyKind::Direct => "direct",
            JourneyKind::Connecting => "connecting",
        }
    }
}

impl fmt::Display for JourneyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A priced trip made of one or two legs.
///
/// # Examples
///
/// ```
/// use journey_finder::domain::{ClockTime, Journey, JourneyKind, Leg};
///
/// let t = |s| ClockTime::parse_hhmm(s).unwrap();
/// let leg = Leg::new("Chennai Express", "Chennai", t("06:00"), "Bangalore", t("11:00"), 350);
/// let journey = Journey::direct(leg);
///
/// assert_eq!(journey.kind(), JourneyKind::Direct);
/// assert_eq!(journey.total_price().as_f64(), 437.5);
/// assert_eq!(journey.final_arrival_time().to_string(), "11:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    kind: JourneyKind,
    total_price: Fare,
    legs: Vec<Leg>,
}

impl Journey {
    /// A journey on a single train.
    pub fn direct(leg: Leg) -> Self {
        Self {
            kind: JourneyKind::Direct,
            total_price: leg.price(),
            legs: vec![leg],
        }
    }

    /// A journey changing trains once, where `first` ends at the station
    /// `second` starts from.
    pub fn connecting(first: Leg, second: Leg) -> Self {
        Self {
            kind: JourneyKind::Connecting,
            total_price: first.price() + second.price(),
            legs: vec![first, second],
        }
    }

    /// Returns whether the journey is direct or connecting.
    pub fn kind(&self) -> JourneyKind {
        self.kind
    }

    /// Returns the sum of the leg fares.
    pub fn total_price(&self) -> Fare {
        self.total_price
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the first leg.
    pub fn first_leg(&self) -> &Leg {
        // At least one leg by construction
        &self.legs[0]
    }

    /// Returns the last leg.
    pub fn last_leg(&self) -> &Leg {
        &self.legs[self.legs.len() - 1]
    }

    /// Returns the departure time from the origin.
    pub fn departure_time(&self) -> ClockTime {
        self.first_leg().departure_time()
    }

    /// Returns the arrival time at the destination.
    pub fn final_arrival_time(&self) -> ClockTime {
        self.last_leg().arrival_time()
    }

    /// Returns the total distance travelled across all legs.
    pub fn total_distance_km(&self) -> u64 {
        self.legs.iter().map(Leg::distance_km).sum()
    }

    /// Minutes from first departure to final arrival, including any wait
    /// at the change.
    pub fn duration_mins(&self) -> u32 {
        self.departure_time()
            .minutes_until(self.final_arrival_time())
    }

    /// Returns the station where the traveller changes trains, if any.
    pub fn change_station(&self) -> Option<&str> {
        match self.kind {
            JourneyKind::Direct => None,
            JourneyKind::Connecting => Some(self.first_leg().to_station()),
        }
    }
}
