use std::sync::Arc;

use ecoscan_core::application::EcoScanService;

use crate::args::ServeArgs;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<ServeArgs>,
    pub service: EcoScanService,
}

impl AppState {
    pub fn new(args: Arc<ServeArgs>, service: EcoScanService) -> Self {
        Self { args, service }
    }
}
