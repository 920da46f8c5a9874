use std::sync::Arc;

use newswire_core::application::NewswireService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NewswireService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NewswireService) -> Self {
        Self { args, service }
    }
}
