use std::sync::Arc;

use sinu_core::application::SinuService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SinuService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SinuService) -> Self {
        Self { args, service }
    }
}
