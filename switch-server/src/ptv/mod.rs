//! PTV Timetable API (v3) client.
//!
//! This module provides an HTTP client for Public Transport Victoria's
//! timetable API, which serves scheduled and real-time departures.
//!
//! Key characteristics of the API:
//! - Every request must be signed: a `devid` parameter plus an HMAC-SHA1
//!   `signature` over the path and query
//! - Times are ISO 8601 UTC strings; `estimated_departure_utc` is null when
//!   a service isn't tracked in real time
//! - Route numbers and direction names are only included when the request
//!   asks for `expand=route` / `expand=direction`

mod client;
mod convert;
mod error;
mod sign;
mod source;
mod types;

pub use client::{DEFAULT_BASE_URL, PtvClient, PtvConfig};
pub use convert::convert_board;
pub use error::FeedError;
pub use sign::{hmac_sha1_upper_hex, sign_path};
pub use source::{BoardQuery, BoardSource};
pub use types::{DepartureDto, DeparturesResponse, DirectionDto, RouteDto};
