//! Train-to-bus switch planning.
//!
//! This module answers: "if I take the next train, where should I get off
//! and which bus should I catch to reach my destination soonest?"
//!
//! The train's arrival at each change station is derived from its departure
//! at the line origin plus fixed offsets. At each station the first bus
//! leaving at least the minimum transfer time later is chosen, and the
//! resulting options are ranked by arrival at the destination.

mod config;
mod error;
mod itinerary;
mod plan;
mod rank;
mod select;

pub use config::{BusConnection, StationConfig, SwitchConfig, TrainLine};
pub use error::SwitchError;
pub use itinerary::{TrainArrivals, build_itineraries, build_itinerary};
pub use plan::{Planner, SwitchPlan};
pub use rank::{Recommendation, rank_itineraries};
pub use select::select_next_feasible;
