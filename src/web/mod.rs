//! Browser-facing pages.
//!
//! Serves the lookup form rendered with Askama; the form talks to the JSON
//! API from the browser.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
