//! Itinerary ranking.
//!
//! Orders options by when they get the rider to the destination. The first
//! option is the recommendation.

use crate::domain::Itinerary;

/// Rank itineraries by destination ETA, earliest first.
///
/// The sort is stable: options arriving at the same time keep the order
/// they were built in.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by_key(Itinerary::destination_eta);
    itineraries
}

/// Ranked options plus the recommended one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Every feasible option, best first
    pub options: Vec<Itinerary>,
}

impl Recommendation {
    /// Rank `itineraries` into a recommendation.
    pub fn from_itineraries(itineraries: Vec<Itinerary>) -> Self {
        Self {
            options: rank_itineraries(itineraries),
        }
    }

    /// The best option, or `None` when nothing is feasible right now.
    pub fn best(&self) -> Option<&Itinerary> {
        self.options.first()
    }
}
