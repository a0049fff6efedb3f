//! Shared data models.
//!
//! Upstream types mirror the AviationStack `/v1/flights` payload. Every object
//! and field there is optional, and `null` is read the same as a missing key.
//! Scalar leaves such as a numeric gate are kept as text; arrays and objects
//! where a scalar belongs are dropped. Board types are what the client
//! application renders.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::FlightStatus;

/// Which side of the board is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightDirection {
    Departure,
    Arrival,
}

impl FlightDirection {
    /// Only the literal `arrival` selects arrivals; anything else is a departure query.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("arrival") => FlightDirection::Arrival,
            _ => FlightDirection::Departure,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlightDirection::Departure => "departure",
            FlightDirection::Arrival => "arrival",
        }
    }

    /// Upstream query parameter that filters on the requested airport.
    pub fn iata_param(self) -> &'static str {
        match self {
            FlightDirection::Departure => "dep_iata",
            FlightDirection::Arrival => "arr_iata",
        }
    }
}

/// Top level of an AviationStack flights response.
#[derive(Debug, Deserialize)]
pub struct FlightsPage {
    pub data: Option<Vec<UpstreamFlight>>,
}

/// Read any JSON scalar as text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// One flight as returned by AviationStack.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamFlight {
    pub flight: Option<FlightIdent>,
    pub airline: Option<Airline>,
    pub departure: Option<Leg>,
    pub arrival: Option<Leg>,
    pub aircraft: Option<Aircraft>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub flight_status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlightIdent {
    #[serde(default, deserialize_with = "lenient_text")]
    pub iata: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Airline {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

/// Departure or arrival side of a flight.
#[derive(Debug, Default, Deserialize)]
pub struct Leg {
    #[serde(default, deserialize_with = "lenient_text")]
    pub airport: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub icao: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub scheduled: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub terminal: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Aircraft {
    #[serde(default, deserialize_with = "lenient_text")]
    pub registration: Option<String>,
}

/// One row of the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_number: String,
    pub airline: String,
    /// Airport at the other end of the flight
    pub airport: String,
    /// ICAO code of the other airport
    pub icao: String,
    pub time: String,
    pub status: FlightStatus,
    pub gate: String,
    pub registration: String,
    pub parking_position: String,
}

/// Successful board response.
#[derive(Debug, Serialize)]
pub struct FlightsResponse {
    /// Airport name as the caller typed it, trimmed
    pub airport: String,
    pub iata: String,
    #[serde(rename = "type")]
    pub direction: FlightDirection,
    pub flights: Vec<Flight>,
}

fn or_default(value: Option<&String>, default: &str) -> String {
    value.cloned().unwrap_or_else(|| default.to_string())
}

/// Like `or_default`, but an empty string also falls through.
fn first_present<'a>(values: impl IntoIterator<Item = Option<&'a String>>) -> Option<&'a String> {
    values.into_iter().flatten().find(|v| !v.is_empty())
}

/// Cut the `HH:MM` part out of a scheduled timestamp.
///
/// Takes the characters from 8 before the end up to 3 before the end, clamped
/// at the start of the string. `2024-05-01T14:30:00` gives `14:30`; strings
/// shorter than four characters (including the `N/A` placeholder) give `""`.
pub fn clock_time(scheduled: &str) -> String {
    let chars: Vec<char> = scheduled.chars().collect();
    let start = chars.len().saturating_sub(8);
    let end = chars.len().saturating_sub(3);
    if start >= end {
        return String::new();
    }
    chars[start..end].iter().collect()
}

impl Flight {
    /// Flatten an upstream record for a board looking in `direction`.
    pub fn from_upstream(flight: &UpstreamFlight, direction: FlightDirection) -> Self {
        let departure = flight.departure.as_ref();
        let arrival = flight.arrival.as_ref();

        let (own_leg, other_leg) = match direction {
            FlightDirection::Departure => (departure, arrival),
            FlightDirection::Arrival => (arrival, departure),
        };

        let scheduled = or_default(own_leg.and_then(|l| l.scheduled.as_ref()), "N/A");
        let status = flight.flight_status.as_deref().unwrap_or("unknown");

        Self {
            flight_number: or_default(flight.flight.as_ref().and_then(|f| f.iata.as_ref()), "N/A"),
            airline: or_default(flight.airline.as_ref().and_then(|a| a.name.as_ref()), "Unknown"),
            airport: or_default(other_leg.and_then(|l| l.airport.as_ref()), "Unknown"),
            icao: or_default(other_leg.and_then(|l| l.icao.as_ref()), "N/A"),
            time: clock_time(&scheduled),
            status: FlightStatus::from_token(status),
            gate: first_present([
                departure.and_then(|l| l.gate.as_ref()),
                arrival.and_then(|l| l.gate.as_ref()),
            ])
            .cloned()
            .unwrap_or_else(|| "TBA".to_string()),
            registration: first_present([flight.aircraft.as_ref().and_then(|a| a.registration.as_ref())])
                .cloned()
                .unwrap_or_else(|| "N/A".to_string()),
            parking_position: first_present([
                departure.and_then(|l| l.terminal.as_ref()),
                arrival.and_then(|l| l.terminal.as_ref()),
            ])
            .cloned()
            .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}
