//! Journey leg type.
//!
//! A `Leg` is one train-segment of a journey: boarding one train at one
//! station and alighting at a later station on the same train.

use super::{ClockTime, Fare};

/// A priced segment of a journey on a single train.
///
/// Legs are derived output and never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    train_name: String,
    from_station: String,
    departure_time: ClockTime,
    to_station: String,
    arrival_time: ClockTime,
    distance_km: u64,
    price: Fare,
}

impl Leg {
    /// Create a leg, pricing it from its distance.
    pub fn new(
        train_name: impl Into<String>,
        from_station: impl Into<String>,
        departure_time: ClockTime,
        to_station: impl Into<String>,
        arrival_time: ClockTime,
        distance_km: u64,
    ) -> Self {
        Self {
            train_name: train_name.into(),
            from_station: from_station.into(),
            departure_time,
            to_station: to_station.into(),
            arrival_time,
            distance_km,
            price: Fare::for_distance(distance_km),
        }
    }

    /// Returns the name of the train.
    pub fn train_name(&self) -> &str {
        &self.train_name
    }

    /// Returns the boarding station.
    pub fn from_station(&self) -> &str {
        &self.from_station
    }

    /// Returns the departure time at the boarding station.
    pub fn departure_time(&self) -> ClockTime {
        self.departure_time
    }

    /// Returns the alighting station.
    pub fn to_station(&self) -> &str {
        &self.to_station
    }

    /// Returns the time at the alighting station.
    ///
    /// Timetables only record departures, so this is the train's departure
    /// time from the alighting station.
    pub fn arrival_time(&self) -> ClockTime {
        self.arrival_time
    }

    /// Returns the distance travelled in kilometres.
    pub fn distance_km(&self) -> u64 {
        self.distance_km
    }

    /// Returns the fare for this leg.
    pub fn price(&self) -> Fare {
        self.price
    }

    /// Minutes spent on the train.
    pub fn duration_mins(&self) -> u32 {
        self.departure_time.minutes_until(self.arrival_time)
    }
}
