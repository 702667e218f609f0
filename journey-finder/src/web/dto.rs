//! Data transfer objects for web requests and responses.

use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Fare, Journey, Leg};
use crate::planner::SortOrder;

/// Request to search for journeys between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteSearchRequest {
    /// Origin station name (any case)
    pub from: String,

    /// Destination station name (any case)
    pub to: String,

    /// Optional display order; discovery order when absent or empty
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort: Option<SortOrder>,
}

/// Treat `sort=` (as sent by a form's blank option) like a missing field.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<SortOrder>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => {
            SortOrder::deserialize(IntoDeserializer::<D::Error>::into_deserializer(name)).map(Some)
        }
    }
}

/// A journey option.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResult {
    /// "direct" or "connecting"
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Sum of leg prices
    pub total_price: Fare,

    /// Time at the destination (HH:mm)
    pub final_arrival_time: String,

    /// One leg for direct journeys, two for connecting
    pub legs: Vec<LegResult>,

    /// Total distance over all legs
    pub total_distance_km: u64,

    /// First departure to final arrival, in minutes
    pub duration_mins: u32,
}

/// A train leg in a journey.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    pub train_name: String,
    pub from_station: String,
    pub departure_time: String,
    pub to_station: String,
    pub arrival_time: String,
    pub distance_km: u64,
    pub price: Fare,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl JourneyResult {
    /// Create from a domain Journey.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            kind: journey.kind().as_str(),
            total_price: journey.total_price(),
            final_arrival_time: journey.final_arrival_time().to_string(),
            legs: journey.legs().iter().map(LegResult::from_leg).collect(),
            total_distance_km: journey.total_distance_km(),
            duration_mins: journey.duration_mins(),
        }
    }
}

impl LegResult {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            train_name: leg.train_name().to_string(),
            from_station: leg.from_station().to_string(),
            departure_time: leg.departure_time().to_string(),
            to_station: leg.to_station().to_string(),
            arrival_time: leg.arrival_time().to_string(),
            distance_km: leg.distance_km(),
            price: leg.price(),
        }
    }
}
