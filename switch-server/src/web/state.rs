//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::board::BoardConfig;
use crate::config::ConfigError;
use crate::ptv::PtvClient;
use crate::switch::SwitchConfig;

/// Shared application state.
///
/// Contains everything needed to handle a request. Nothing in here changes
/// after startup.
#[derive(Clone)]
pub struct AppState {
    /// PTV API client, or the reason one couldn't be built
    pub ptv: Arc<Result<PtvClient, ConfigError>>,

    /// Switch planner configuration
    pub switch: Arc<SwitchConfig>,

    /// Departure board configuration
    pub boards: Arc<BoardConfig>,

    /// Directory served for non-API paths
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        ptv: Result<PtvClient, ConfigError>,
        switch: SwitchConfig,
        boards: BoardConfig,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            ptv: Arc::new(ptv),
            switch: Arc::new(switch),
            boards: Arc::new(boards),
            static_dir: Arc::new(static_dir.into()),
        }
    }

    /// The PTV client, if configured.
    pub fn ptv(&self) -> Result<&PtvClient, ConfigError> {
        self.ptv.as_ref().as_ref().map_err(Clone::clone)
    }
}
