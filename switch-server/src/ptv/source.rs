//! Board queries and the trait the planner fetches through.

use std::future::Future;

use crate::domain::{Departure, DirectionId, RouteId, RouteType, StopId};

use super::error::FeedError;

/// Default number of departures requested per board.
const DEFAULT_MAX_RESULTS: u16 = 10;

/// What to fetch: one stop's departures, optionally narrowed to a route and
/// direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardQuery {
    /// Stop to fetch departures for
    pub stop: StopId,

    /// Transport mode; the provider's URL scheme requires one
    pub route_type: RouteType,

    /// Only departures on this route
    pub route: Option<RouteId>,

    /// Only departures in this direction
    pub direction: Option<DirectionId>,

    /// Maximum departures per route returned by the provider
    pub max_results: u16,
}

impl BoardQuery {
    /// Query all departures of `route_type` from `stop`.
    pub fn new(route_type: RouteType, stop: StopId) -> Self {
        Self {
            stop,
            route_type,
            route: None,
            direction: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Restrict to one route.
    pub fn with_route(mut self, route: RouteId) -> Self {
        self.route = Some(route);
        self
    }

    /// Restrict to one direction.
    pub fn with_direction(mut self, direction: DirectionId) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the result limit.
    pub fn with_max_results(mut self, n: u16) -> Self {
        self.max_results = n;
        self
    }

    /// The unsigned request path and query for this board.
    ///
    /// Always expands routes and directions so departures can be matched on
    /// route number and direction name.
    pub fn path(&self) -> String {
        let mut path = format!(
            "/v3/departures/route_type/{}/stop/{}",
            self.route_type.code(),
            self.stop
        );
        if let Some(route) = self.route {
            path.push_str(&format!("/route/{route}"));
        }
        path.push('?');
        if let Some(direction) = self.direction {
            path.push_str(&format!("direction_id={direction}&"));
        }
        path.push_str(&format!(
            "max_results={}&expand=route&expand=direction",
            self.max_results
        ));
        path
    }
}

/// A source of departure boards.
///
/// Implemented by [`super::PtvClient`] for live data. The abstraction lets
/// the planner be tested with fixed boards.
pub trait BoardSource {
    /// Fetch one board, in feed order.
    ///
    /// Makes exactly one upstream request per call.
    fn fetch_board(
        &self,
        query: &BoardQuery,
    ) -> impl Future<Output = Result<Vec<Departure>, FeedError>> + Send;
}
