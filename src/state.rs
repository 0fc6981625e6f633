// state.rs
use std::sync::Arc;

use crate::render::Render;

#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<dyn Render>,
}

impl AppState {
    pub fn new(renderer: Arc<dyn Render>) -> Self {
        Self { renderer }
    }
}
