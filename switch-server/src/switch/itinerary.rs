//! Itinerary building.
//!
//! Derives when the next outbound train reaches each change station, then
//! pairs each station with the first bus the rider can make there.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::{Departure, Itinerary, RouteNumber, StopId, TrainArrival, add_minutes};

use super::config::{StationConfig, SwitchConfig};
use super::error::SwitchError;
use super::select::select_next_feasible;

/// The next outbound train and its estimated arrival at every station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainArrivals {
    train: Departure,
    arrivals: Vec<TrainArrival>,
}

impl TrainArrivals {
    /// Derive arrivals from the train board at the line origin.
    ///
    /// Picks the outbound departure with the earliest effective time and
    /// adds each station's fixed offset to it. Errors with
    /// [`SwitchError::NoUpcomingService`] if no outbound train is on the
    /// board.
    pub fn from_next_train(
        trains: &[Departure],
        config: &SwitchConfig,
    ) -> Result<Self, SwitchError> {
        let train = trains
            .iter()
            .filter(|d| d.direction() == config.line.direction)
            .min_by_key(|d| d.effective_time())
            .ok_or(SwitchError::NoUpcomingService)?;

        let departs = train.effective_time();
        let arrivals = config
            .stations
            .iter()
            .map(|station| TrainArrival {
                station: station.name.clone(),
                key: station.key.clone(),
                arrival: add_minutes(departs, station.train_offset_mins),
            })
            .collect();

        Ok(Self {
            train: train.clone(),
            arrivals,
        })
    }

    /// The train these arrivals were derived from.
    pub fn train(&self) -> &Departure {
        &self.train
    }

    /// Arrival at a station, by station name.
    pub fn at(&self, station: &str) -> Option<DateTime<Utc>> {
        self.arrivals
            .iter()
            .find(|a| a.station == station)
            .map(|a| a.arrival)
    }

    /// All arrivals, in line order.
    pub fn iter(&self) -> impl Iterator<Item = &TrainArrival> {
        self.arrivals.iter()
    }
}

/// Build the itinerary for one station and bus route.
///
/// Filters `board` down to `route`, then chooses the first bus leaving at
/// least the configured transfer time after `train_arrival`. Returns `None`
/// when no bus is feasible or the route has no configured travel time.
pub fn build_itinerary(
    station: &StationConfig,
    route: &RouteNumber,
    train_arrival: DateTime<Utc>,
    board: &[Departure],
    now: DateTime<Utc>,
    config: &SwitchConfig,
) -> Option<Itinerary> {
    let travel_mins = config.travel_minutes(route)?;

    let candidates = board.iter().filter(|d| d.is_route(route));
    let bus = select_next_feasible(candidates, train_arrival, config.min_transfer_mins)?;

    Some(Itinerary::new(
        station.name.clone(),
        train_arrival,
        route.clone(),
        bus.clone(),
        travel_mins,
        now,
    ))
}

/// Build every feasible itinerary, in configuration order.
///
/// `boards` maps each bus stop to its departures. Station/route pairs with
/// no feasible bus are left out.
pub fn build_itineraries(
    config: &SwitchConfig,
    arrivals: &TrainArrivals,
    boards: &HashMap<StopId, Vec<Departure>>,
    now: DateTime<Utc>,
) -> Vec<Itinerary> {
    let mut itineraries = Vec::new();

    for station in &config.stations {
        let Some(train_arrival) = arrivals.at(&station.name) else {
            continue;
        };

        for connection in &station.connections {
            let board = boards
                .get(&connection.stop)
                .map(Vec::as_slice)
                .unwrap_or_default();

            for route in &connection.routes {
                if let Some(itinerary) =
                    build_itinerary(station, route, train_arrival, board, now, config)
                {
                    itineraries.push(itinerary);
                }
            }
        }
    }

    itineraries
}
