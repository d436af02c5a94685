//! HTTP request handlers for the business-day API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute, compute_for_date};
use crate::holidays::{Jurisdiction, validate_year};
use crate::models::{CalendarDate, HolidayMap};

use super::request::{BusinessDaysQuery, BusinessDaysRequest, PublicHolidaysQuery, non_empty};
use super::response::{AllHolidaysResponse, ApiError, ApiErrorResponse, BusinessDaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/business-days",
            get(business_days_query_handler).post(business_days_body_handler),
        )
        .route("/api/public-holidays", get(all_public_holidays_handler))
        .route(
            "/api/public-holidays/victoria/:year",
            get(victoria_holidays_handler),
        )
        .route(
            "/api/public-holidays/new-south-wales",
            get(nsw_holidays_handler),
        )
        .route(
            "/api/public-holidays/new-south-wales/:year",
            get(nsw_holidays_for_year_handler),
        )
        .fallback(not_found_handler)
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(StatusCode::OK, json!({ "status": "ok" }))
}

/// Fallback for unknown routes.
async fn not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, "Not Found.").into_response()
}

/// Handler for GET /api/business-days.
///
/// Resolves the reference date (Melbourne today when absent), optionally
/// fetches the jurisdiction's holidays, and returns the report. A failing
/// holiday source only adds a warning; the calculation still succeeds.
async fn business_days_query_handler(
    State(state): State<AppState>,
    query: Result<Query<BusinessDaysQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing business days query");

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
            return ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
                .into_response();
        }
    };

    let started = Instant::now();

    let today = match resolve_date(&state, query.date) {
        Ok(date) => date,
        Err(response) => {
            warn!(correlation_id = %correlation_id, "Rejected reference date");
            return response.into_response();
        }
    };

    let jurisdiction = match non_empty(query.jurisdiction)
        .map(|j| j.parse::<Jurisdiction>())
        .transpose()
    {
        Ok(jurisdiction) => jurisdiction,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Unknown jurisdiction");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let mut warnings = Vec::new();
    let holidays = match jurisdiction {
        Some(jurisdiction) => {
            match state.holidays().holidays_for(jurisdiction, today.year()).await {
                Ok(holidays) => Some(holidays),
                Err(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        jurisdiction = %jurisdiction,
                        error = %err,
                        "Holidays unavailable, counting weekends only"
                    );
                    warnings.push(format!("Holidays for {} unavailable: {}", jurisdiction, err));
                    None
                }
            }
        }
        None => None,
    };

    let report = compute_for_date(today, holidays);
    info!(
        correlation_id = %correlation_id,
        today = %report.today,
        business_days_to_today = report.business_days_to_today,
        business_days_total = report.business_days_total,
        duration_us = started.elapsed().as_micros(),
        "Business days calculated"
    );

    json_response(
        StatusCode::OK,
        BusinessDaysResponse {
            report,
            jurisdiction,
            warnings,
        },
    )
}

/// Handler for POST /api/business-days.
///
/// Accepts a reference date and an optional holiday map in the body. A
/// holidays value that is not a map of strings is ignored with a warning.
async fn business_days_body_handler(
    State(state): State<AppState>,
    payload: Result<Json<BusinessDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing business days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err.body_text(), "JSON data error");
                    ApiError::validation_error(err.body_text())
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let date = non_empty(request.date).unwrap_or_else(|| state.today().to_string());
    let holidays = HolidayMap::from_json(&request.holidays);
    let mut warnings = Vec::new();
    if holidays.is_none() && !request.holidays.is_null() {
        warn!(correlation_id = %correlation_id, "Ignoring holidays that are not a map of strings");
        warnings.push("Ignored holidays: expected an object mapping dates to names".to_string());
    }

    let started = Instant::now();
    match compute(&date, holidays) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                today = %report.today,
                business_days_to_today = report.business_days_to_today,
                business_days_total = report.business_days_total,
                duration_us = started.elapsed().as_micros(),
                "Business days calculated"
            );
            json_response(
                StatusCode::OK,
                BusinessDaysResponse {
                    report,
                    jurisdiction: None,
                    warnings,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /api/public-holidays.
///
/// Fetches every jurisdiction concurrently for the requested year.
async fn all_public_holidays_handler(
    State(state): State<AppState>,
    query: Result<Query<PublicHolidaysQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let year = match query {
        Ok(Query(query)) => query.year.unwrap_or_else(|| state.today().year()),
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
            return ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
                .into_response();
        }
    };
    if let Err(err) = validate_year(year) {
        return ApiErrorResponse::from(err).into_response();
    }

    info!(correlation_id = %correlation_id, year, "Fetching holidays for all jurisdictions");

    let mut holidays = BTreeMap::new();
    let mut errors = BTreeMap::new();
    for (jurisdiction, result) in state.holidays().holidays_for_all(year).await {
        match result {
            Ok(map) => {
                holidays.insert(jurisdiction, map);
            }
            Err(err) => {
                warn!(correlation_id = %correlation_id, jurisdiction = %jurisdiction, error = %err, "Jurisdiction failed");
                errors.insert(jurisdiction, ApiErrorResponse::from(err).error);
            }
        }
    }

    json_response(
        StatusCode::OK,
        AllHolidaysResponse {
            year,
            holidays,
            errors,
        },
    )
}

/// Handler for GET /api/public-holidays/victoria/:year.
async fn victoria_holidays_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    match year {
        Ok(Path(year)) => holidays_response(&state, Jurisdiction::Victoria, Some(year)).await,
        Err(rejection) => invalid_path(rejection),
    }
}

/// Handler for GET /api/public-holidays/new-south-wales.
///
/// Returns every year listed on the NSW page.
async fn nsw_holidays_handler(State(state): State<AppState>) -> Response {
    holidays_response(&state, Jurisdiction::NewSouthWales, None).await
}

/// Handler for GET /api/public-holidays/new-south-wales/:year.
async fn nsw_holidays_for_year_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    match year {
        Ok(Path(year)) => holidays_response(&state, Jurisdiction::NewSouthWales, Some(year)).await,
        Err(rejection) => invalid_path(rejection),
    }
}

/// Fetches one jurisdiction's holidays, filtered to `year` when given.
async fn holidays_response(
    state: &AppState,
    jurisdiction: Jurisdiction,
    year: Option<i32>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, jurisdiction = %jurisdiction, year, "Fetching public holidays");

    let service = state.holidays();
    let result = match year {
        Some(year) => service.holidays_for(jurisdiction, year).await,
        None => {
            service
                .fetch_holidays(jurisdiction, state.today().year())
                .await
        }
    };

    match result {
        Ok(holidays) => json_response(StatusCode::OK, holidays),
        Err(err) => {
            warn!(correlation_id = %correlation_id, jurisdiction = %jurisdiction, error = %err, "Public holiday lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn invalid_path(rejection: PathRejection) -> Response {
    warn!(error = %rejection, "Invalid path parameter");
    ApiErrorResponse::bad_request(ApiError::new("INVALID_YEAR", rejection.body_text()))
        .into_response()
}

/// Parses the requested date, or falls back to Melbourne today.
fn resolve_date(state: &AppState, date: Option<String>) -> Result<CalendarDate, ApiErrorResponse> {
    match non_empty(date) {
        Some(text) => CalendarDate::parse(&text).map_err(ApiErrorResponse::from),
        None => Ok(state.today()),
    }
}
