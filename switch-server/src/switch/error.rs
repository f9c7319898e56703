//! Switch planning errors.

use crate::ptv::FeedError;

/// Errors from planning a switch.
#[derive(Debug, thiserror::Error)]
pub enum SwitchError {
    /// A required board could not be fetched. The whole plan fails: a
    /// ranking built from partial boards could recommend the wrong bus.
    #[error("failed to fetch departures: {0}")]
    Feed(#[from] FeedError),

    /// No outbound train in the fetched window. Not a failure for callers;
    /// the web layer reports it as a normal response.
    #[error("no upcoming outbound train")]
    NoUpcomingService,

    /// Configuration is inconsistent
    #[error("invalid switch configuration: {0}")]
    InvalidConfig(String),
}
