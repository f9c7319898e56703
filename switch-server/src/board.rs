//! Departure boards for the commute's first leg.
//!
//! Shows the next outbound trains from the inner-city stop and the next
//! buses on the feeder route, both fetched concurrently.

use futures::future::try_join;

use crate::domain::{Departure, DirectionId, RouteId, RouteNumber, RouteType, StopId};
use crate::ptv::{BoardQuery, BoardSource, FeedError};

/// Train board settings.
#[derive(Debug, Clone)]
pub struct TrainBoardConfig {
    /// Station display name
    pub station: String,
    /// Line display name
    pub line: String,
    pub stop: StopId,
    pub route: RouteId,
    pub direction: DirectionId,
    /// Departures requested from the feed
    pub max_results: u16,
    /// Departures kept after filtering
    pub keep: usize,
}

/// Bus board settings.
#[derive(Debug, Clone)]
pub struct BusBoardConfig {
    /// Stop display name
    pub stop_name: String,
    pub stop: StopId,
    /// Only buses on this route number are shown
    pub route: RouteNumber,
    /// Only buses heading this way are shown
    pub direction_name: String,
    /// Destination label shown next to each bus
    pub destination: String,
    pub max_results: u16,
    pub keep: usize,
}

/// Settings for both boards.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub train: TrainBoardConfig,
    pub bus: BusBoardConfig,
}

impl Default for BoardConfig {
    /// Burnley (Glen Waverley line) and the 733 towards Box Hill.
    fn default() -> Self {
        Self {
            train: TrainBoardConfig {
                station: "Burnley".to_string(),
                line: "Glen Waverley".to_string(),
                stop: StopId(1030),
                route: RouteId(7),
                direction: DirectionId(6),
                max_results: 10,
                keep: 6,
            },
            bus: BusBoardConfig {
                stop_name: "Woodside Ave/Clayton Rd".to_string(),
                stop: StopId(22752),
                route: RouteNumber::new("733"),
                direction_name: "Box Hill".to_string(),
                destination: "Box Hill via Mt Waverley".to_string(),
                max_results: 10,
                keep: 4,
            },
        }
    }
}

impl BoardConfig {
    /// Feed query for the train board.
    pub fn train_query(&self) -> BoardQuery {
        BoardQuery::new(RouteType::Train, self.train.stop)
            .with_route(self.train.route)
            .with_direction(self.train.direction)
            .with_max_results(self.train.max_results)
    }

    /// Feed query for the bus board.
    pub fn bus_query(&self) -> BoardQuery {
        BoardQuery::new(RouteType::Bus, self.bus.stop).with_max_results(self.bus.max_results)
    }
}

/// Filtered departures for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureBoards {
    pub trains: Vec<Departure>,
    pub buses: Vec<Departure>,
}

/// Keep outbound trains, in feed order, up to the configured count.
pub fn filter_trains(departures: Vec<Departure>, config: &TrainBoardConfig) -> Vec<Departure> {
    departures
        .into_iter()
        .filter(|d| d.direction() == config.direction)
        .take(config.keep)
        .collect()
}

/// Keep buses on the configured route and direction, up to the configured
/// count.
pub fn filter_buses(departures: Vec<Departure>, config: &BusBoardConfig) -> Vec<Departure> {
    departures
        .into_iter()
        .filter(|d| {
            d.is_route(&config.route) && d.direction_name() == Some(config.direction_name.as_str())
        })
        .take(config.keep)
        .collect()
}

/// Fetch both boards concurrently and filter them.
///
/// Fails if either fetch fails.
pub async fn fetch_boards<S: BoardSource>(
    source: &S,
    config: &BoardConfig,
) -> Result<DepartureBoards, FeedError> {
    let train_query = config.train_query();
    let bus_query = config.bus_query();

    let (trains, buses) = try_join(
        source.fetch_board(&train_query),
        source.fetch_board(&bus_query),
    )
    .await?;

    Ok(DepartureBoards {
        trains: filter_trains(trains, &config.train),
        buses: filter_buses(buses, &config.bus),
    })
}
