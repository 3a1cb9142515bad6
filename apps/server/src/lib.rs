//! Ticketboard Server Library
//!
//! Board models, the grouping/ordering engine, data sources and HTTP routes.
//! Exposed as a library for the terminal client and for testing.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod source;
