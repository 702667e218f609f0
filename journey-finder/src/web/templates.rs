//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Journey, JourneyKind, Leg};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Journey results fragment.
#[derive(Template)]
#[template(path = "journey_results.html")]
pub struct JourneyResultsTemplate {
    pub from: String,
    pub to: String,
    pub journeys: Vec<JourneyView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Journey view model for templates.
#[derive(Debug, Clone)]
pub struct JourneyView {
    pub kind: String,
    pub is_direct: bool,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_display: String,
    pub total_distance_km: u64,
    pub total_price: String,
    pub legs: Vec<LegView>,
}

impl JourneyView {
    /// Create from a domain Journey.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            kind: journey.kind().to_string(),
            is_direct: journey.kind() == JourneyKind::Direct,
            departure_time: journey.departure_time().to_string(),
            arrival_time: journey.final_arrival_time().to_string(),
            duration_display: format_duration(journey.duration_mins()),
            total_distance_km: journey.total_distance_km(),
            total_price: journey.total_price().to_string(),
            legs: journey.legs().iter().map(LegView::from_leg).collect(),
        }
    }
}

/// Leg view model.
#[derive(Debug, Clone)]
pub struct LegView {
    pub train_name: String,
    pub from_station: String,
    pub departure_time: String,
    pub to_station: String,
    pub arrival_time: String,
    pub distance_km: u64,
    pub price: String,
}

impl LegView {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            train_name: leg.train_name().to_string(),
            from_station: leg.from_station().to_string(),
            departure_time: leg.departure_time().to_string(),
            to_station: leg.to_station().to_string(),
            arrival_time: leg.arrival_time().to_string(),
            distance_km: leg.distance_km(),
            price: leg.price().to_string(),
        }
    }
}

/// Format minutes as "5h 0m", or "45m" under an hour.
fn format_duration(total_mins: u32) -> String {
    let hours = total_mins / 60;
    let mins = total_mins % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
