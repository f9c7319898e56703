//! Web layer for the switch planner.
//!
//! Provides the JSON API, CORS handling and static asset serving.

mod assets;
mod dto;
mod routes;
mod state;

pub use assets::{content_type, resolve_asset_path};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
