//! Web layer for the journey finder.
//!
//! Provides HTTP endpoints for searching journeys and managing trains,
//! plus a small HTML frontend.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
