//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::domain::Train;
use crate::planner::{Planner, SearchError, sort_journeys};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// Static assets are served from `config.static_dir`, and the API accepts
/// cross-origin calls from `config.allowed_origin`.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/routes", get(search_routes))
        .route("/api/trains", get(list_trains).post(add_train))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match HeaderValue::from_str(&config.allowed_origin) {
        Ok(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        ),
        Err(_) => {
            warn!(
                origin = %config.allowed_origin,
                "invalid CORS origin, cross-origin requests disabled"
            );
            router
        }
    }
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page() -> Result<Html<String>, AppError> {
    let html = IndexTemplate.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Find direct and one-change journeys between two stations.
async fn search_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteSearchRequest>,
) -> Result<Response, AppError> {
    let planner = Planner::new(state.store.as_ref());
    let result = planner.find(&req.from, &req.to).await?;

    let journeys = match req.sort {
        Some(order) => sort_journeys(result.journeys, order),
        None => result.journeys,
    };

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = JourneyResultsTemplate {
            from: req.from,
            to: req.to,
            journeys: journeys.iter().map(JourneyView::from_journey).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let results: Vec<JourneyResult> = journeys.iter().map(JourneyResult::from_journey).collect();
        Ok(Json(results).into_response())
    }
}

/// List every stored train.
async fn list_trains(State(state): State<AppState>) -> Json<Vec<Train>> {
    Json(state.store.fetch_all().await)
}

/// Store a train, replacing any train with the same id.
async fn add_train(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let train: Train = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "rejected train");
        AppError::BadRequest {
            message: format!("Invalid train: {e}"),
        }
    })?;

    state.store.save(train.clone()).await?;
    info!(id = train.id(), name = train.name(), "stored train");

    Ok((StatusCode::CREATED, Json(train)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Invalid(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "bad request");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{TrainStore, sample_trains};
    use axum::body::to_bytes;
    use serde_json::Value;

    fn sample_state() -> AppState {
        AppState::new(TrainStore::with_trains(sample_trains().unwrap()))
    }

    fn request(from: &str, to: &str) -> RouteSearchRequest {
        RouteSearchRequest {
            from: from.to_string(),
            to: to.to_string(),
            sort: None,
        }
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn search_direct_journey_json() {
        let response = search_routes(
            State(sample_state()),
            HeaderMap::new(),
            Query(request("Chennai", "Bangalore")),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let first = &body[0];
        assert_eq!(first["type"], "direct");
        assert_eq!(first["totalPrice"], 437.5);
        assert_eq!(first["finalArrivalTime"], "11:00");
        assert_eq!(first["legs"][0]["trainName"], "Chennai Express");
    }

    #[tokio::test]
    async fn search_connecting_journey_json() {
        let response = search_routes(
            State(sample_state()),
            HeaderMap::new(),
            Query(request("chennai", "SALEM")),
        )
        .await
        .unwrap();

        let body = body_json(response).await;
        let journeys = body.as_array().unwrap();
        assert!(!journeys.is_empty());
        assert!(journeys.iter().all(|j| j["type"] == "connecting"));
        assert!(journeys.iter().all(|j| j["totalPrice"] == 662.5));
        assert_eq!(journeys[1]["legs"][0]["trainName"], "Kaveri Express");
        assert_eq!(journeys[1]["legs"][1]["fromStation"], "Bangalore");
    }

    #[tokio::test]
    async fn unknown_station_is_empty_array() {
        let response = search_routes(
            State(sample_state()),
            HeaderMap::new(),
            Query(request("Atlantis", "Chennai")),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, Value::Array(Vec::new()));
    }

    #[tokio::test]
    async fn sort_by_fare_when_requested() {
        let mut req = request("Chennai", "Mysore");
        req.sort = Some(crate::planner::SortOrder::Fare);

        let response = search_routes(State(sample_state()), HeaderMap::new(), Query(req))
            .await
            .unwrap();

        let body = body_json(response).await;
        let prices: Vec<f64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["totalPrice"].as_f64().unwrap())
            .collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn blank_sort_from_form_is_accepted() {
        let uri: axum::http::Uri = "/api/routes?from=Chennai&to=Bangalore&sort="
            .parse()
            .unwrap();
        let query = Query::<RouteSearchRequest>::try_from_uri(&uri).unwrap();
        assert_eq!(query.sort, None);

        let response = search_routes(State(sample_state()), HeaderMap::new(), query)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await[0]["type"], "direct");
    }

    #[tokio::test]
    async fn discovery_order_without_sort() {
        let response = search_routes(
            State(sample_state()),
            HeaderMap::new(),
            Query(request("Chennai", "Bangalore")),
        )
        .await
        .unwrap();

        let body = body_json(response).await;
        let kinds: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["type"].as_str().unwrap())
            .collect();
        assert_eq!(&kinds[..2], &["direct", "direct"]);
        assert!(kinds[2..].iter().all(|k| *k == "connecting"));
    }

    #[tokio::test]
    async fn search_html_when_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));

        let response = search_routes(
            State(sample_state()),
            headers,
            Query(request("Chennai", "Bangalore")),
        )
        .await
        .unwrap();

        let html = body_text(response).await;
        assert!(html.contains("Chennai Express"));
        assert!(html.contains("437.50"));
    }

    #[tokio::test]
    async fn list_trains_returns_store_contents() {
        let Json(trains) = list_trains(State(sample_state())).await;
        assert_eq!(trains.len(), 3);
        assert_eq!(trains[2].name(), "Kaveri Express");
    }

    #[tokio::test]
    async fn add_train_then_search() {
        let state = sample_state();
        let body = Bytes::from_static(
            br#"{"id": "T004", "name": "Salem Link", "route": [
                {"stationName": "Mysore", "departureTime": "14:00", "distanceFromPrevious": 0},
                {"stationName": "Salem", "departureTime": "18:00", "distanceFromPrevious": 240}
            ]}"#,
        );

        let response = add_train(State(state.clone()), body).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(state.store.len().await, 4);

        let response = search_routes(
            State(state),
            HeaderMap::new(),
            Query(request("Mysore", "Salem")),
        )
        .await
        .unwrap();
        let body = body_json(response).await;
        assert_eq!(body[0]["type"], "direct");
        assert_eq!(body[0]["totalPrice"], 300.0);
    }

    #[tokio::test]
    async fn add_train_rejects_empty_route() {
        let state = sample_state();
        let body = Bytes::from_static(br#"{"id": "T404", "name": "Ghost", "route": []}"#);

        let err = add_train(State(state.clone()), body).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(state.store.len().await, 3);
    }

    #[tokio::test]
    async fn add_train_rejects_bad_time() {
        let body = Bytes::from_static(
            br#"{"id": "T5", "name": "X", "route": [
                {"stationName": "A", "departureTime": "25:00", "distanceFromPrevious": 0}
            ]}"#,
        );

        let response = add_train(State(sample_state()), body)
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_failure_is_server_error() {
        let err = AppError::from(SearchError::Store(StoreError::Malformed {
            path: "trains.json".into(),
            message: "truncated".into(),
        }));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("truncated"));
    }

    #[tokio::test]
    async fn index_page_renders() {
        let Html(html) = index_page().await.unwrap();
        assert!(html.contains("Journey Finder"));
    }

    #[test]
    fn accepts_html_header() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        assert!(accepts_html(&headers));
    }

    #[test]
    fn router_builds_with_invalid_origin() {
        let config = ServerConfig {
            allowed_origin: "bad\norigin".to_string(),
            ..ServerConfig::default()
        };
        let _router = create_router(sample_state(), &config);
    }
}
