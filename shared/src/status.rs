//! Flight status labels shown on the board.

use serde::{Serialize, Serializer};

/// Display status of a flight. Serializes as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    OnTime,
    Boarding,
    Arrived,
    Cancelled,
    Delayed,
    Diverted,
    Unknown,
}

impl FlightStatus {
    /// Map an AviationStack `flight_status` token, ignoring case.
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "scheduled" => FlightStatus::OnTime,
            "active" => FlightStatus::Boarding,
            "landed" => FlightStatus::Arrived,
            "cancelled" => FlightStatus::Cancelled,
            "incident" => FlightStatus::Delayed,
            "diverted" => FlightStatus::Diverted,
            _ => FlightStatus::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Boarding => "Boarding",
            FlightStatus::Arrived => "Arrived",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Diverted => "Diverted",
            FlightStatus::Unknown => "Unknown",
        }
    }
}

impl Serialize for FlightStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
