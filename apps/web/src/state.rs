use std::sync::Arc;

use axum::response::Html;
use mongodb::Database;
use tera::{Context, Tera};

use crate::config::Config;
use crate::errors::AppError;
use crate::store::blog::BlogStore;
use crate::store::resume::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub templates: Arc<Tera>,
    pub config: Config,
}

impl AppState {
    pub fn blogs(&self) -> BlogStore {
        BlogStore::new(&self.db)
    }

    pub fn resumes(&self) -> ResumeStore {
        ResumeStore::new(&self.db)
    }

    /// Renders a template into an HTML response body.
    pub fn render(&self, template: &str, ctx: &Context) -> Result<Html<String>, AppError> {
        Ok(Html(self.templates.render(template, ctx)?))
    }
}
