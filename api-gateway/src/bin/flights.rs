//! Flights Lambda - Handles the flight board endpoint.
//!
//! Endpoints:
//! - GET /flights?airport=<name>&type=departure|arrival - Scheduled flights for an airport
//! - OPTIONS /flights - CORS preflight
//!
//! The airport name is resolved to an IATA code through the static directory,
//! then the board is fetched from AviationStack and flattened for the client.

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use shared::http::{error_response, from_error, json_response, preflight_response};
use shared::{airports, AviationStackClient, Config, Flight, FlightDirection, FlightsResponse};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Message sent instead of raw upstream errors when they are not exposed.
const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch flight data";

/// Application state shared across requests.
struct AppState {
    config: Config,
    client: AviationStackClient,
}

impl AppState {
    fn new() -> Result<Self, Error> {
        Self::with_config(Config::from_env())
    }

    fn with_config(config: Config) -> Result<Self, Error> {
        let client = AviationStackClient::new(&config)?;
        Ok(Self { config, client })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    if event.method() == Method::OPTIONS {
        return preflight_response();
    }

    match flight_board(&state, &event).await {
        Ok(board) => json_response(200, &board),
        Err(e) => {
            let status = e.status_code();
            if status >= 500 {
                error!("Flight board request failed: {}", e);
            } else {
                warn!("Rejected flight board request: {}", e);
            }

            match e {
                shared::Error::Upstream(_) if !state.config.expose_upstream_errors => {
                    error_response(status, UPSTREAM_FAILURE_MESSAGE)
                }
                e => from_error(&e),
            }
        }
    }
}

/// Validate the request and build the board.
///
/// Checks run in a fixed order: method, airport name, API key, directory lookup,
/// upstream call.
async fn flight_board(state: &AppState, event: &Request) -> shared::Result<FlightsResponse> {
    if event.method() != Method::GET {
        return Err(shared::Error::MethodNotAllowed);
    }

    let params = event.query_string_parameters();
    let airport = params.first("airport").unwrap_or_default().trim().to_string();
    let direction = FlightDirection::from_query(params.first("type"));

    if airport.is_empty() {
        return Err(shared::Error::Validation("Airport name is required".to_string()));
    }

    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or_else(|| shared::Error::Config("API key not configured".to_string()))?;

    let iata = airports::iata_code(&airport)
        .ok_or_else(|| shared::Error::AirportNotFound(airport.clone()))?;

    info!("Fetching {} board for {} ({})", direction.as_str(), airport, iata);

    let flights: Vec<Flight> = state
        .client
        .flights(api_key, direction, iata)
        .await?
        .iter()
        .map(|flight| Flight::from_upstream(flight, direction))
        .collect();

    Ok(FlightsResponse {
        airport,
        iata: iata.to_string(),
        direction,
        flights,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new()?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
