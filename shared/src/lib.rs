//! Shared library for the flight board Lambda.
//!
//! This crate provides the airport directory, status labels, the AviationStack
//! client and the response helpers used by the `flights` function.

pub mod airports;
pub mod aviationstack;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod status;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use aviationstack::AviationStackClient;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{Flight, FlightDirection, FlightsResponse, UpstreamFlight};
pub use status::FlightStatus;
