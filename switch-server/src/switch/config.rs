//! Static configuration for the train-to-bus switch.
//!
//! Describes the train line, the stations where a rider can change onto a
//! bus, and the buses that leave from each. All values are fixed policy,
//! not measured live.

use std::collections::HashMap;

use crate::domain::{DirectionId, RouteNumber, RouteType, StopId};
use crate::ptv::BoardQuery;

use super::error::SwitchError;

/// The train line the rider is on.
#[derive(Debug, Clone)]
pub struct TrainLine {
    /// Line name for logs and responses
    pub name: String,

    /// Stop whose departure board supplies the next train; offsets are
    /// measured from here
    pub origin_stop: StopId,

    /// Direction of travel towards the change stations
    pub direction: DirectionId,

    /// How many train departures to fetch
    pub max_results: u16,
}

/// Buses from one stop that a station connects to.
#[derive(Debug, Clone)]
pub struct BusConnection {
    /// Bus stop id
    pub stop: StopId,

    /// Route numbers worth catching from this stop
    pub routes: Vec<RouteNumber>,
}

/// A station where the rider may leave the train.
#[derive(Debug, Clone)]
pub struct StationConfig {
    /// Display name
    pub name: String,

    /// Key for this station in the `nextTrain` response object
    pub key: String,

    /// Train travel time from the line origin, in minutes
    pub train_offset_mins: i64,

    /// Bus stops reachable from this station
    pub connections: Vec<BusConnection>,
}

impl StationConfig {
    /// Create a station with no connections yet.
    pub fn new(name: impl Into<String>, key: impl Into<String>, train_offset_mins: i64) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            train_offset_mins,
            connections: Vec::new(),
        }
    }

    /// Add a bus stop and the routes to consider from it.
    pub fn with_connection(mut self, stop: StopId, routes: &[&str]) -> Self {
        self.connections.push(BusConnection {
            stop,
            routes: routes.iter().map(|r| RouteNumber::new(*r)).collect(),
        });
        self
    }
}

/// Configuration for switch planning.
#[derive(Debug, Clone)]
pub struct SwitchConfig {
    /// Train line being ridden
    pub line: TrainLine,

    /// Change stations in line order
    pub stations: Vec<StationConfig>,

    /// Typical bus travel time to the destination, per route (minutes)
    pub travel_mins: HashMap<RouteNumber, i64>,

    /// Minimum time between train arrival and bus departure (minutes).
    /// Buses leaving sooner than this after the train are not considered.
    pub min_transfer_mins: i64,

    /// How many departures to fetch per bus stop
    pub bus_max_results: u16,

    /// Destination display name
    pub destination: String,
}

impl SwitchConfig {
    /// Bus travel time to the destination for a route.
    pub fn travel_minutes(&self, route: &RouteNumber) -> Option<i64> {
        self.travel_mins.get(route).copied()
    }

    /// Distinct bus stops across all stations, in configuration order.
    pub fn bus_stops(&self) -> Vec<StopId> {
        let mut stops: Vec<StopId> = Vec::new();
        for connection in self.stations.iter().flat_map(|s| &s.connections) {
            if !stops.contains(&connection.stop) {
                stops.push(connection.stop);
            }
        }
        stops
    }

    /// Board query for the next outbound train.
    pub fn train_query(&self) -> BoardQuery {
        BoardQuery::new(RouteType::Train, self.line.origin_stop)
            .with_direction(self.line.direction)
            .with_max_results(self.line.max_results)
    }

    /// Board query for one bus stop.
    pub fn bus_query(&self, stop: StopId) -> BoardQuery {
        BoardQuery::new(RouteType::Bus, stop).with_max_results(self.bus_max_results)
    }

    /// Check the configuration is usable.
    ///
    /// Every configured route needs a travel time, offsets can't be
    /// negative, and the transfer buffer can't be negative.
    pub fn validate(&self) -> Result<(), SwitchError> {
        if self.min_transfer_mins < 0 {
            return Err(SwitchError::InvalidConfig(
                "minimum transfer time must not be negative".to_string(),
            ));
        }

        for station in &self.stations {
            if station.train_offset_mins < 0 {
                return Err(SwitchError::InvalidConfig(format!(
                    "station {} has a negative train offset",
                    station.name
                )));
            }
            for route in station.connections.iter().flat_map(|c| &c.routes) {
                if self.travel_minutes(route).is_none() {
                    return Err(SwitchError::InvalidConfig(format!(
                        "route {route} at {} has no travel time",
                        station.name
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for SwitchConfig {
    /// Glen Waverley line to Monash University.
    fn default() -> Self {
        let travel_mins = [("733", 17), ("703", 13), ("737", 15), ("742", 12)]
            .into_iter()
            .map(|(route, mins)| (RouteNumber::new(route), mins))
            .collect();

        Self {
            line: TrainLine {
                name: "Glen Waverley".to_string(),
                origin_stop: StopId(1137), // Mount Waverley
                direction: DirectionId(6),
                max_results: 5,
            },
            stations: vec![
                StationConfig::new("Mount Waverley", "atMountWaverley", 0)
                    .with_connection(StopId(19051), &["733"]),
                StationConfig::new("Syndal", "atSyndal", 3)
                    .with_connection(StopId(16517), &["703"])
                    .with_connection(StopId(11385), &["737"]),
                StationConfig::new("Glen Waverley", "atGlenWaverley", 6)
                    .with_connection(StopId(11119), &["742", "737"]),
            ],
            travel_mins,
            min_transfer_mins: 3,
            bus_max_results: 10,
            destination: "Monash".to_string(),
        }
    }
}
