//! Domain types for the switch planner.
//!
//! These types describe departures and itineraries independently of the
//! feed's JSON shape. Derived values (effective time, destination ETA) are
//! computed inside the types so callers never re-derive them.

mod departure;
mod ids;
mod itinerary;
mod time;

pub use departure::Departure;
pub use ids::{DirectionId, RouteId, RouteNumber, RouteType, StopId};
pub use itinerary::{Itinerary, TrainArrival};
pub use time::{TimeError, add_minutes, parse_utc, rounded_minutes_between, to_iso};
