//! Business-day engine for Australian jurisdictions.
//!
//! This crate counts business days in a month, excluding weekends and the
//! public holidays of a jurisdiction, and serves the results over HTTP.
//! Holiday tables are scraped from the published Victorian and New South
//! Wales government pages.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
