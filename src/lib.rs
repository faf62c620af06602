pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod infra;

use std::sync::Arc;

use crate::app::markdown::MarkdownRenderer;
use crate::config::AppConfig;
use crate::infra::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub markdown: Option<MarkdownRenderer>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: &AppConfig) -> Self {
        let markdown = config.render_markdown.then(MarkdownRenderer::new);
        Self { store, markdown }
    }
}
