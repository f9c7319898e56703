//! Identifier types for the PTV network.
//!
//! The provider uses bare integers for stops, routes and directions. Wrapping
//! each in its own type stops a stop id being passed where a route id is
//! expected.

use std::fmt;

/// A PTV stop identifier (e.g. `1137` for Mount Waverley station).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub u32);

/// A PTV route identifier.
///
/// This is the provider's internal id, not the number printed on a bus.
/// See [`RouteNumber`] for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub u32);

/// A PTV direction identifier (e.g. `6` for outbound Glen Waverley trains).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectionId(pub u32);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DirectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public route number as shown to riders, e.g. `"733"`.
///
/// Bus boards are fetched per stop and contain every route serving it, so
/// itineraries filter on this number rather than on [`RouteId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteNumber(String);

impl RouteNumber {
    /// Create a route number from its display string.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Returns the route number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transport mode, as encoded in the provider's URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteType {
    Train,
    Tram,
    Bus,
    VLine,
    NightBus,
}

impl RouteType {
    /// The numeric code used in request paths.
    pub fn code(self) -> u8 {
        match self {
            RouteType::Train => 0,
            RouteType::Tram => 1,
            RouteType::Bus => 2,
            RouteType::VLine => 3,
            RouteType::NightBus => 4,
        }
    }

    /// Parse a numeric route type code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(RouteType::Train),
            1 => Some(RouteType::Tram),
            2 => Some(RouteType::Bus),
            3 => Some(RouteType::VLine),
            4 => Some(RouteType::NightBus),
            _ => None,
        }
    }
}
