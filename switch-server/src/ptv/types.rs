//! PTV API response DTOs.
//!
//! These types map directly to the Timetable API v3 departures response.
//! Only the fields we consume are declared; serde ignores the rest. The
//! `routes` and `directions` tables are only present when the request asks
//! for them with `expand=`.

use std::collections::HashMap;

use serde::Deserialize;

/// Response from `/v3/departures/route_type/{rt}/stop/{stop}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    /// Departures in feed order.
    #[serde(default)]
    pub departures: Vec<DepartureDto>,

    /// Expanded routes, keyed by route id as a string.
    #[serde(default)]
    pub routes: HashMap<String, RouteDto>,

    /// Expanded directions, keyed by direction id as a string.
    #[serde(default)]
    pub directions: HashMap<String, DirectionDto>,
}

/// One departure on the board.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureDto {
    pub stop_id: u32,
    pub route_id: u32,
    pub direction_id: u32,

    /// Timetabled departure, ISO 8601 UTC.
    pub scheduled_departure_utc: String,

    /// Real-time estimate, absent or null when not tracked.
    #[serde(default)]
    pub estimated_departure_utc: Option<String>,

    #[serde(default)]
    pub platform_number: Option<String>,
}

/// Route metadata from the `routes` expansion.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    #[serde(default)]
    pub route_id: Option<u32>,

    /// Number shown to riders, e.g. "733". Empty for trains.
    #[serde(default)]
    pub route_number: Option<String>,

    #[serde(default)]
    pub route_name: Option<String>,
}

/// Direction metadata from the `directions` expansion.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionDto {
    #[serde(default)]
    pub direction_id: Option<u32>,

    /// Display name, e.g. "Box Hill".
    #[serde(default)]
    pub direction_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_expanded_board() {
        let json = r#"{
            "departures": [
                {
                    "stop_id": 19051,
                    "route_id": 13271,
                    "run_id": -1,
                    "run_ref": "abc",
                    "direction_id": 4,
                    "disruption_ids": [],
                    "scheduled_departure_utc": "2024-03-15T10:05:00Z",
                    "estimated_departure_utc": null,
                    "at_platform": false,
                    "platform_number": null,
                    "flags": "",
                    "departure_sequence": 0
                }
            ],
            "routes": {
                "13271": {"route_type": 2, "route_id": 13271, "route_name": "Box Hill - Monash", "route_number": "733"}
            },
            "directions": {
                "4": {"direction_id": 4, "direction_name": "Box Hill", "route_id": 13271, "route_type": 2}
            },
            "status": {"version": "3.0", "health": 1}
        }"#;

        let board: DeparturesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(board.departures.len(), 1);
        assert_eq!(board.departures[0].estimated_departure_utc, None);
        assert_eq!(
            board.routes["13271"].route_number.as_deref(),
            Some("733")
        );
        assert_eq!(
            board.directions["4"].direction_name.as_deref(),
            Some("Box Hill")
        );
    }

    #[test]
    fn missing_expansions_default_to_empty() {
        let board: DeparturesResponse = serde_json::from_str(r#"{"departures": []}"#).unwrap();
        assert!(board.routes.is_empty());
        assert!(board.directions.is_empty());
    }

    #[test]
    fn missing_departures_defaults_to_empty() {
        let board: DeparturesResponse = serde_json::from_str("{}").unwrap();
        assert!(board.departures.is_empty());
    }
}
