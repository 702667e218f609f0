//! Trains and their timetabled stops.

use serde::{Deserialize, Serialize};

use super::{ClockTime, DomainError};

/// A station visited by a train.
///
/// `distance_from_previous` is the length in kilometres of the track since
/// the preceding stop; by convention it is `0` for the first stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub station_name: String,
    pub departure_time: ClockTime,
    pub distance_from_previous: u32,
}

impl Stop {
    /// Create a new stop.
    pub fn new(
        station_name: impl Into<String>,
        departure_time: ClockTime,
        distance_from_previous: u32,
    ) -> Self {
        Self {
            station_name: station_name.into(),
            departure_time,
            distance_from_previous,
        }
    }

    /// Create a stop from an "HH:mm" departure time string.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_finder::domain::Stop;
    ///
    /// let stop = Stop::parse("Vellore", "08:00", 150).unwrap();
    /// assert_eq!(stop.departure_time.to_string(), "08:00");
    ///
    /// assert!(Stop::parse("Vellore", "8am", 150).is_err());
    /// ```
    pub fn parse(
        station_name: impl Into<String>,
        departure_time: &str,
        distance_from_previous: u32,
    ) -> Result<Self, DomainError> {
        let station_name = station_name.into();
        let departure_time =
            ClockTime::parse_hhmm(departure_time).map_err(|source| DomainError::InvalidTime {
                station: station_name.clone(),
                source,
            })?;
        Ok(Self::new(station_name, departure_time, distance_from_previous))
    }
}

/// A train and the ordered list of stops it calls at.
///
/// The route is never empty. Station names may repeat within a route;
/// lookups use the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrainRecord")]
pub struct Train {
    id: String,
    name: String,
    route: Vec<Stop>,
}

/// Unvalidated shape of a stored train.
#[derive(Deserialize)]
struct TrainRecord {
    id: String,
    name: String,
    route: Vec<Stop>,
}

impl TryFrom<TrainRecord> for Train {
    type Error = DomainError;

    fn try_from(record: TrainRecord) -> Result<Self, Self::Error> {
        Train::new(record.id, record.name, record.route)
    }
}

impl Train {
    /// Create a train, rejecting an empty route.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        route: Vec<Stop>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if route.is_empty() {
            return Err(DomainError::EmptyRoute(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            route,
        })
    }

    /// Returns the train's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the train's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stops in calling order.
    pub fn route(&self) -> &[Stop] {
        &self.route
    }

    /// Returns the first stop.
    pub fn origin(&self) -> &Stop {
        // Non-empty by construction
        &self.route[0]
    }

    /// Returns the last stop.
    pub fn terminus(&self) -> &Stop {
        &self.route[self.route.len() - 1]
    }
}
