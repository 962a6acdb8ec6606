use common::create_template_engine;
use common::utils::config::AppConfig;
use common::utils::template_engine::{ProvidesTemplateEngine, TemplateEngine};
use std::sync::Arc;
use tracing::debug;

use crate::middlewares::response_middleware::ProvidesHtmlState;

#[derive(Clone)]
pub struct HtmlState {
    pub templates: Arc<TemplateEngine>,
    pub config: AppConfig,
}

impl HtmlState {
    /// Uses the crate's `templates/` directory unless an engine is supplied.
    pub fn new(config: AppConfig, template_engine: Option<Arc<TemplateEngine>>) -> Self {
        let templates =
            template_engine.unwrap_or_else(|| Arc::new(create_template_engine!("templates")));
        debug!("Template engine configured for html_router.");

        Self { templates, config }
    }
}

impl ProvidesTemplateEngine for HtmlState {
    fn template_engine(&self) -> &Arc<TemplateEngine> {
        &self.templates
    }
}

impl ProvidesHtmlState for HtmlState {
    fn html_state(&self) -> &HtmlState {
        self
    }
}
