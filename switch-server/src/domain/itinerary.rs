//! Itineraries: one train arrival combined with one connecting bus.

use chrono::{DateTime, Utc};

use super::time::{add_minutes, rounded_minutes_between};
use super::{Departure, RouteNumber};

/// Estimated arrival of the next outbound train at one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainArrival {
    /// Station display name
    pub station: String,

    /// Key used for this station in responses (e.g. `atSyndal`)
    pub key: String,

    /// Effective arrival time at the station
    pub arrival: DateTime<Utc>,
}

/// A complete station → bus → destination plan.
///
/// Built once per request and never modified. The destination ETA and the
/// minutes-from-now figure are derived in [`Itinerary::new`] so every
/// itinerary computes them the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    station: String,
    train_arrival: DateTime<Utc>,
    route: RouteNumber,
    bus: Departure,
    bus_travel_minutes: i64,
    destination_eta: DateTime<Utc>,
    minutes_from_now: i64,
}

impl Itinerary {
    /// Assemble an itinerary from a train arrival and the chosen bus.
    pub fn new(
        station: impl Into<String>,
        train_arrival: DateTime<Utc>,
        route: RouteNumber,
        bus: Departure,
        bus_travel_minutes: i64,
        now: DateTime<Utc>,
    ) -> Self {
        let destination_eta = add_minutes(bus.effective_time(), bus_travel_minutes);
        let minutes_from_now = rounded_minutes_between(now, destination_eta);
        Self {
            station: station.into(),
            train_arrival,
            route,
            bus,
            bus_travel_minutes,
            destination_eta,
            minutes_from_now,
        }
    }

    /// Station where the rider leaves the train.
    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn train_arrival(&self) -> DateTime<Utc> {
        self.train_arrival
    }

    /// Route number of the connecting bus.
    pub fn route(&self) -> &RouteNumber {
        &self.route
    }

    /// The chosen connecting bus.
    pub fn bus(&self) -> &Departure {
        &self.bus
    }

    pub fn bus_travel_minutes(&self) -> i64 {
        self.bus_travel_minutes
    }

    /// When the rider reaches the destination.
    pub fn destination_eta(&self) -> DateTime<Utc> {
        self.destination_eta
    }

    /// Minutes from the request time until arrival, rounded half-up.
    pub fn minutes_from_now(&self) -> i64 {
        self.minutes_from_now
    }
}
