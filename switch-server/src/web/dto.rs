//! Data transfer objects for web responses.
//!
//! Field names are camelCase to match what the browser front end reads.
//! All times are ISO 8601 strings with millisecond precision.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{BoardConfig, DepartureBoards};
use crate::domain::{Departure, Itinerary, to_iso};
use crate::switch::SwitchPlan;

/// Response for `/api/switch`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchResponse {
    /// When the request was processed
    pub timestamp: String,

    /// True when no outbound train was found; the other fields are then empty
    pub no_upcoming_service: bool,

    /// Human-readable explanation when there's nothing to show
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The next train's arrival at each station, keyed e.g. `atSyndal`
    pub next_train: Option<BTreeMap<String, String>>,

    /// Best option, if any
    pub recommendation: Option<ItineraryResult>,

    /// Every feasible option, best first
    pub all_options: Vec<ItineraryResult>,
}

/// One itinerary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    /// Station to leave the train at
    pub station: String,

    /// Train arrival at that station
    pub train_arrival: String,

    /// The connecting bus
    pub bus: BusResult,

    /// Destination name
    pub destination: String,

    /// Arrival at the destination
    pub destination_eta: String,

    /// Minutes from now until arrival at the destination
    pub minutes_from_now: i64,
}

/// The bus leg of an itinerary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusResult {
    /// Route number, e.g. "733"
    pub route: String,

    /// Stop the bus leaves from
    pub stop: u32,

    /// Effective departure time
    pub departure: String,

    /// Timetabled departure time
    pub scheduled: String,

    /// Whether `departure` comes from a real-time estimate
    pub is_real_time: bool,

    /// Typical bus travel time to the destination, minutes
    pub travel_time: i64,
}

/// Response for `/api/departures`.
#[derive(Debug, Serialize)]
pub struct BoardsResponse {
    pub timestamp: String,
    pub trains: TrainBoardResult,
    pub buses: BusBoardResult,
}

/// The train board.
#[derive(Debug, Serialize)]
pub struct TrainBoardResult {
    pub station: String,
    pub line: String,
    pub departures: Vec<TrainDepartureResult>,
}

/// A train on the board.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDepartureResult {
    pub scheduled: String,
    pub estimated: Option<String>,
    pub is_real_time: bool,
    pub platform: Option<String>,
}

/// The bus board.
#[derive(Debug, Serialize)]
pub struct BusBoardResult {
    pub stop: String,
    pub departures: Vec<BusDepartureResult>,
}

/// A bus on the board.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusDepartureResult {
    pub scheduled: String,
    pub estimated: Option<String>,
    pub is_real_time: bool,
    pub route: String,
    pub destination: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error summary
    pub error: String,

    /// Underlying cause, when there is one worth showing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Conversion implementations

impl SwitchResponse {
    /// Create from a completed plan.
    pub fn from_plan(plan: &SwitchPlan, destination: &str, now: DateTime<Utc>) -> Self {
        let next_train = plan
            .arrivals
            .iter()
            .map(|a| (a.key.clone(), to_iso(a.arrival)))
            .collect();

        let all_options: Vec<ItineraryResult> = plan
            .recommendation
            .options
            .iter()
            .map(|i| ItineraryResult::from_itinerary(i, destination))
            .collect();

        Self {
            timestamp: to_iso(now),
            no_upcoming_service: false,
            message: None,
            next_train: Some(next_train),
            recommendation: all_options.first().cloned(),
            all_options,
        }
    }

    /// Response when no outbound train is running.
    pub fn no_service(now: DateTime<Utc>) -> Self {
        Self {
            timestamp: to_iso(now),
            no_upcoming_service: true,
            message: Some("No upcoming trains".to_string()),
            next_train: None,
            recommendation: None,
            all_options: Vec::new(),
        }
    }
}

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary, destination: &str) -> Self {
        let bus = itinerary.bus();
        Self {
            station: itinerary.station().to_string(),
            train_arrival: to_iso(itinerary.train_arrival()),
            bus: BusResult {
                route: itinerary.route().to_string(),
                stop: bus.stop().0,
                departure: to_iso(bus.effective_time()),
                scheduled: to_iso(bus.scheduled()),
                is_real_time: bus.is_real_time(),
                travel_time: itinerary.bus_travel_minutes(),
            },
            destination: destination.to_string(),
            destination_eta: to_iso(itinerary.destination_eta()),
            minutes_from_now: itinerary.minutes_from_now(),
        }
    }
}

impl BoardsResponse {
    /// Create from fetched boards.
    pub fn from_boards(boards: &DepartureBoards, config: &BoardConfig, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: to_iso(now),
            trains: TrainBoardResult {
                station: config.train.station.clone(),
                line: config.train.line.clone(),
                departures: boards
                    .trains
                    .iter()
                    .map(TrainDepartureResult::from_departure)
                    .collect(),
            },
            buses: BusBoardResult {
                stop: config.bus.stop_name.clone(),
                departures: boards
                    .buses
                    .iter()
                    .map(|d| BusDepartureResult::from_departure(d, &config.bus.destination))
                    .collect(),
            },
        }
    }
}

impl TrainDepartureResult {
    /// Create from a domain Departure.
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            scheduled: to_iso(departure.scheduled()),
            estimated: departure.estimated().map(to_iso),
            is_real_time: departure.is_real_time(),
            platform: departure.platform().map(str::to_string),
        }
    }
}

impl BusDepartureResult {
    /// Create from a domain Departure.
    pub fn from_departure(departure: &Departure, destination: &str) -> Self {
        Self {
            scheduled: to_iso(departure.scheduled()),
            estimated: departure.estimated().map(to_iso),
            is_real_time: departure.is_real_time(),
            route: departure
                .route_number()
                .map(|n| n.to_string())
                .unwrap_or_default(),
            destination: destination.to_string(),
        }
    }
}
