//! HTTP API module for the attendance engine.
//!
//! This module exposes document processing and the saved-summary
//! collection over REST.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ProcessRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
