//! Request-scoped switch planning.
//!
//! Fetches the train board and every bus board concurrently, waits for all
//! of them, then builds and ranks itineraries. Nothing is shared between
//! requests.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use futures::future::{try_join, try_join_all};
use tracing::{debug, info};

use crate::ptv::{BoardQuery, BoardSource};

use super::config::SwitchConfig;
use super::error::SwitchError;
use super::itinerary::{TrainArrivals, build_itineraries};
use super::rank::Recommendation;

/// Result of planning a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchPlan {
    /// The next outbound train's arrival at each station
    pub arrivals: TrainArrivals,

    /// Ranked itineraries
    pub recommendation: Recommendation,
}

/// Plans train-to-bus switches against a board source.
pub struct Planner<'a, S> {
    source: &'a S,
    config: &'a SwitchConfig,
}

impl<'a, S: BoardSource> Planner<'a, S> {
    /// Create a planner.
    pub fn new(source: &'a S, config: &'a SwitchConfig) -> Self {
        Self { source, config }
    }

    /// Plan the best switch as of `now`.
    ///
    /// All boards are fetched concurrently. If any fetch fails the whole
    /// plan fails with [`SwitchError::Feed`]; in-flight fetches are dropped.
    /// If the train board has no outbound train, returns
    /// [`SwitchError::NoUpcomingService`].
    pub async fn plan(&self, now: DateTime<Utc>) -> Result<SwitchPlan, SwitchError> {
        let train_query = self.config.train_query();
        let bus_stops = self.config.bus_stops();
        let bus_queries: Vec<BoardQuery> = bus_stops
            .iter()
            .map(|stop| self.config.bus_query(*stop))
            .collect();

        debug!(boards = bus_queries.len() + 1, "Fetching boards");

        let (trains, bus_boards) = try_join(
            self.source.fetch_board(&train_query),
            try_join_all(bus_queries.iter().map(|q| self.source.fetch_board(q))),
        )
        .await?;

        let arrivals = TrainArrivals::from_next_train(&trains, self.config)?;

        let boards: HashMap<_, _> = bus_stops.into_iter().zip(bus_boards).collect();
        let itineraries = build_itineraries(self.config, &arrivals, &boards, now);
        let recommendation = Recommendation::from_itineraries(itineraries);

        info!(
            line = %self.config.line.name,
            options = recommendation.options.len(),
            best = ?recommendation.best().map(|i| (i.station(), i.route().as_str())),
            "Planned switch"
        );

        Ok(SwitchPlan {
            arrivals,
            recommendation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Departure, DirectionId, RouteId, RouteNumber, RouteType, StopId, parse_utc,
    };
    use crate::ptv::FeedError;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn t(s: &str) -> DateTime<Utc> {
        parse_utc(s).unwrap()
    }

    fn train(scheduled: &str) -> Departure {
        Departure::new(StopId(1137), RouteId(7), DirectionId(6), t(scheduled), None)
    }

    fn bus(stop: u32, route: &str, scheduled: &str) -> Departure {
        Departure::new(StopId(stop), RouteId(1), DirectionId(1), t(scheduled), None)
            .with_route_number(RouteNumber::new(route))
    }

    /// Board source serving fixed boards, keyed by stop.
    struct FixedSource {
        boards: HashMap<StopId, Vec<Departure>>,
        failing: HashSet<StopId>,
        queries: Mutex<Vec<BoardQuery>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl FixedSource {
        fn new(boards: HashMap<StopId, Vec<Departure>>) -> Self {
            Self {
                boards,
                failing: HashSet::new(),
                queries: Mutex::new(Vec::new()),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }

        fn failing(mut self, stop: StopId) -> Self {
            self.failing.insert(stop);
            self
        }
    }

    impl BoardSource for FixedSource {
        async fn fetch_board(&self, query: &BoardQuery) -> Result<Vec<Departure>, FeedError> {
            self.queries.lock().unwrap().push(query.clone());

            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.failing.contains(&query.stop) {
                return Err(FeedError::Api {
                    status: 503,
                    message: "Service Unavailable".to_string(),
                });
            }
            Ok(self.boards.get(&query.stop).cloned().unwrap_or_default())
        }
    }

    fn boards() -> HashMap<StopId, Vec<Departure>> {
        let mut boards = HashMap::new();
        boards.insert(StopId(1137), vec![train("2024-03-15T10:00:00Z")]);
        // Mount Waverley 733: 10:08 + 17 = 10:25
        boards.insert(StopId(19051), vec![bus(19051, "733", "2024-03-15T10:08:00Z")]);
        // Syndal 703: 10:09 + 13 = 10:22
        boards.insert(StopId(16517), vec![bus(16517, "703", "2024-03-15T10:09:00Z")]);
        boards.insert(StopId(11385), vec![]);
        // Glen Waverley 742: 10:11 + 12 = 10:23
        boards.insert(StopId(11119), vec![bus(11119, "742", "2024-03-15T10:11:00Z")]);
        boards
    }

    #[tokio::test]
    async fn plans_and_ranks() {
        let config = SwitchConfig::default();
        let source = FixedSource::new(boards());

        let plan = Planner::new(&source, &config)
            .plan(t("2024-03-15T09:58:00Z"))
            .await
            .unwrap();

        let ranked: Vec<_> = plan
            .recommendation
            .options
            .iter()
            .map(|i| (i.station(), i.route().as_str()))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("Syndal", "703"),
                ("Glen Waverley", "742"),
                ("Mount Waverley", "733")
            ]
        );

        let best = plan.recommendation.best().unwrap();
        assert_eq!(best.destination_eta(), t("2024-03-15T10:22:00Z"));
        assert_eq!(best.minutes_from_now(), 24);
        assert_eq!(plan.arrivals.at("Glen Waverley"), Some(t("2024-03-15T10:06:00Z")));
    }

    #[tokio::test]
    async fn fetches_every_board_once_concurrently() {
        let config = SwitchConfig::default();
        let source = FixedSource::new(boards());

        Planner::new(&source, &config)
            .plan(t("2024-03-15T09:58:00Z"))
            .await
            .unwrap();

        let queries = source.queries.lock().unwrap();
        assert_eq!(queries.len(), 5);
        assert_eq!(
            queries.iter().filter(|q| q.route_type == RouteType::Train).count(),
            1
        );
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn one_failed_board_fails_plan() {
        let config = SwitchConfig::default();
        let source = FixedSource::new(boards()).failing(StopId(11385));

        let err = Planner::new(&source, &config)
            .plan(t("2024-03-15T09:58:00Z"))
            .await
            .unwrap_err();

        assert!(matches!(err, SwitchError::Feed(FeedError::Api { status: 503, .. })));
    }

    #[tokio::test]
    async fn no_outbound_train_is_no_service() {
        let config = SwitchConfig::default();
        let mut boards = boards();
        boards.insert(StopId(1137), vec![]);
        let source = FixedSource::new(boards);

        let err = Planner::new(&source, &config)
            .plan(t("2024-03-15T09:58:00Z"))
            .await
            .unwrap_err();

        assert!(matches!(err, SwitchError::NoUpcomingService));
    }

    #[tokio::test]
    async fn no_feasible_buses_is_empty_recommendation() {
        let config = SwitchConfig::default();
        let mut boards = HashMap::new();
        boards.insert(StopId(1137), vec![train("2024-03-15T10:00:00Z")]);
        let source = FixedSource::new(boards);

        let plan = Planner::new(&source, &config)
            .plan(t("2024-03-15T09:58:00Z"))
            .await
            .unwrap();

        assert!(plan.recommendation.best().is_none());
        assert!(plan.recommendation.options.is_empty());
    }

    #[tokio::test]
    async fn planning_is_idempotent() {
        let config = SwitchConfig::default();
        let source = FixedSource::new(boards());
        let planner = Planner::new(&source, &config);
        let now = t("2024-03-15T09:58:00Z");

        let first = planner.plan(now).await.unwrap();
        let second = planner.plan(now).await.unwrap();
        assert_eq!(first, second);
    }
}
