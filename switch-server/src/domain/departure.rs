//! A single departure from a stop, as reported by the live feed.

use chrono::{DateTime, Utc};

use super::{DirectionId, RouteId, RouteNumber, StopId};

/// One departure on a stop's board.
///
/// The feed may supply a real-time estimate alongside the timetabled time.
/// When present the estimate wins; [`Departure::effective_time`] is the one
/// place that rule is applied, and everything downstream (transfer
/// selection, train arrival derivation) goes through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    stop: StopId,
    route: RouteId,
    direction: DirectionId,
    scheduled: DateTime<Utc>,
    estimated: Option<DateTime<Utc>>,
    route_number: Option<RouteNumber>,
    direction_name: Option<String>,
    platform: Option<String>,
}

impl Departure {
    /// Create a departure from its identifying fields and times.
    pub fn new(
        stop: StopId,
        route: RouteId,
        direction: DirectionId,
        scheduled: DateTime<Utc>,
        estimated: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            stop,
            route,
            direction,
            scheduled,
            estimated,
            route_number: None,
            direction_name: None,
            platform: None,
        }
    }

    /// Attach the public route number (resolved from the feed's route table).
    pub fn with_route_number(mut self, number: RouteNumber) -> Self {
        self.route_number = Some(number);
        self
    }

    /// Attach the direction's display name (e.g. "Box Hill").
    pub fn with_direction_name(mut self, name: impl Into<String>) -> Self {
        self.direction_name = Some(name.into());
        self
    }

    /// Attach a platform number.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// The time to use for all planning: estimated if known, else scheduled.
    pub fn effective_time(&self) -> DateTime<Utc> {
        self.estimated.unwrap_or(self.scheduled)
    }

    /// Whether this departure carries a real-time estimate.
    pub fn is_real_time(&self) -> bool {
        self.estimated.is_some()
    }

    pub fn stop(&self) -> StopId {
        self.stop
    }

    pub fn route(&self) -> RouteId {
        self.route
    }

    pub fn direction(&self) -> DirectionId {
        self.direction
    }

    pub fn scheduled(&self) -> DateTime<Utc> {
        self.scheduled
    }

    pub fn estimated(&self) -> Option<DateTime<Utc>> {
        self.estimated
    }

    pub fn route_number(&self) -> Option<&RouteNumber> {
        self.route_number.as_ref()
    }

    pub fn direction_name(&self) -> Option<&str> {
        self.direction_name.as_deref()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// Whether this departure runs on the given public route number.
    pub fn is_route(&self, number: &RouteNumber) -> bool {
        self.route_number.as_ref() == Some(number)
    }
}
