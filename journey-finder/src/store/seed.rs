//! Sample timetable loaded at startup.

use tracing::info;

use crate::domain::{DomainError, Stop, Train};

use super::error::StoreError;
use super::trains::TrainStore;

/// The three sample trains: Chennai Express, Bangalore Mail and Kaveri
/// Express.
pub fn sample_trains() -> Result<Vec<Train>, DomainError> {
    Ok(vec![
        Train::new(
            "T001",
            "Chennai Express",
            vec![
                Stop::parse("Chennai", "06:00", 0)?,
                Stop::parse("Vellore", "08:00", 150)?,
                Stop::parse("Bangalore", "11:00", 200)?,
                Stop::parse("Mysore", "13:00", 150)?,
            ],
        )?,
        Train::new(
            "T002",
            "Bangalore Mail",
            vec![
                Stop::parse("Bangalore", "07:00", 0)?,
                Stop::parse("Salem", "09:00", 180)?,
                Stop::parse("Erode", "11:00", 80)?,
                Stop::parse("Coimbatore", "13:00", 100)?,
            ],
        )?,
        Train::new(
            "T003",
            "Kaveri Express",
            vec![
                Stop::parse("Chennai", "05:30", 0)?,
                Stop::parse("Katpadi", "07:00", 130)?,
                Stop::parse("Bangalore", "10:30", 220)?,
            ],
        )?,
    ])
}

/// Clear the store and fill it with the sample trains.
///
/// Returns the number of trains loaded.
pub async fn load_sample_data(store: &TrainStore) -> Result<usize, StoreError> {
    let count = store.replace_all(sample_trains()?).await?;
    info!(count, "loaded sample trains");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::find_journeys;

    #[test]
    fn three_sample_trains() {
        let trains = sample_trains().unwrap();
        let names: Vec<_> = trains.iter().map(Train::name).collect();
        assert_eq!(
            names,
            vec!["Chennai Express", "Bangalore Mail", "Kaveri Express"]
        );
        let ids: Vec<_> = trains.iter().map(Train::id).collect();
        assert_eq!(ids, vec!["T001", "T002", "T003"]);
    }

    #[test]
    fn chennai_express_stops() {
        let trains = sample_trains().unwrap();
        let route = trains[0].route();

        let stops: Vec<_> = route
            .iter()
            .map(|s| {
                (
                    s.station_name.as_str(),
                    s.departure_time.to_string(),
                    s.distance_from_previous,
                )
            })
            .collect();

        assert_eq!(
            stops,
            vec![
                ("Chennai", "06:00".to_string(), 0),
                ("Vellore", "08:00".to_string(), 150),
                ("Bangalore", "11:00".to_string(), 200),
                ("Mysore", "13:00".to_string(), 150),
            ]
        );
    }

    #[test]
    fn first_stops_have_no_distance() {
        for train in sample_trains().unwrap() {
            assert_eq!(train.origin().distance_from_previous, 0);
        }
    }

    #[test]
    fn sample_scenarios() {
        let trains = sample_trains().unwrap();

        let direct = find_journeys(&trains, "Chennai", "Bangalore");
        assert_eq!(direct[0].total_price().as_f64(), 437.5);
        assert_eq!(direct[0].final_arrival_time().to_string(), "11:00");

        let connecting = find_journeys(&trains, "Chennai", "Salem");
        assert!(
            connecting
                .iter()
                .any(|j| j.change_station() == Some("Bangalore")
                    && j.total_price().as_f64() == 662.5)
        );
    }

    #[tokio::test]
    async fn load_replaces_existing_data() {
        let store = TrainStore::with_trains(sample_trains().unwrap()[..1].to_vec());
        let count = load_sample_data(&store).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn loading_twice_does_not_duplicate() {
        let store = TrainStore::in_memory();
        load_sample_data(&store).await.unwrap();
        load_sample_data(&store).await.unwrap();

        assert_eq!(store.len().await, 3);
    }
}
