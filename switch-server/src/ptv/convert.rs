//! Conversion from PTV DTOs to domain types.
//!
//! Resolves each departure's route number and direction name from the
//! response's expansion tables, and parses the timestamps.

use crate::domain::{Departure, DirectionId, RouteId, RouteNumber, StopId, parse_utc};

use super::error::FeedError;
use super::types::{DepartureDto, DeparturesResponse};

/// Convert a departures response into domain departures, in feed order.
///
/// A departure with an unparsable timestamp fails the whole board: a board
/// with silently missing entries could change which bus is recommended.
pub fn convert_board(board: &DeparturesResponse) -> Result<Vec<Departure>, FeedError> {
    board
        .departures
        .iter()
        .map(|dto| convert_departure(dto, board))
        .collect()
}

fn convert_departure(
    dto: &DepartureDto,
    board: &DeparturesResponse,
) -> Result<Departure, FeedError> {
    let scheduled = parse_utc(&dto.scheduled_departure_utc)
        .map_err(|e| FeedError::InvalidTime(e.to_string()))?;

    let estimated = dto
        .estimated_departure_utc
        .as_deref()
        .map(parse_utc)
        .transpose()
        .map_err(|e| FeedError::InvalidTime(e.to_string()))?;

    let mut departure = Departure::new(
        StopId(dto.stop_id),
        RouteId(dto.route_id),
        DirectionId(dto.direction_id),
        scheduled,
        estimated,
    );

    // Trains have an empty route_number; treat that as unknown
    let route_number = board
        .routes
        .get(&dto.route_id.to_string())
        .and_then(|r| r.route_number.as_deref())
        .filter(|n| !n.is_empty());
    if let Some(number) = route_number {
        departure = departure.with_route_number(RouteNumber::new(number));
    }

    let direction_name = board
        .directions
        .get(&dto.direction_id.to_string())
        .and_then(|d| d.direction_name.as_deref());
    if let Some(name) = direction_name {
        departure = departure.with_direction_name(name);
    }

    if let Some(platform) = dto.platform_number.as_deref().filter(|p| !p.is_empty()) {
        departure = departure.with_platform(platform);
    }

    Ok(departure)
}
