//! HTTP API module for the business-day engine.
//!
//! This module exposes the calculator and the public holiday tables as JSON
//! endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BusinessDaysQuery, BusinessDaysRequest, PublicHolidaysQuery};
pub use response::{AllHolidaysResponse, ApiError, ApiErrorResponse, BusinessDaysResponse};
pub use state::AppState;
