use std::sync::Arc;

use wayfarer_core::application::WayfarerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: WayfarerService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: WayfarerService) -> Self {
        Self { args, service }
    }
}
