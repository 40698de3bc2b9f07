//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::CoordinateService;

#[derive(Clone)]
pub struct AppState {
    pub coordinate_service: Arc<CoordinateService>,
}

impl AppState {
    pub fn new(coordinate_service: Arc<CoordinateService>) -> Self {
        Self { coordinate_service }
    }
}
