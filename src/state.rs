//! Shared application state for all routes.

use crate::gateway::Gateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
}

impl AppState {
    pub fn new(gateway: Gateway) -> Self {
        AppState { gateway }
    }
}
