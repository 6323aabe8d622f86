//! Fitting page handlers
//!
//! Routes:
//! - GET  /  - fitting page with the model dropdown, nothing selected
//! - POST /  - fitting page re-rendered with the submitted model selected
//!
//! Both handlers re-read the catalog file, so the dropdown always reflects
//! the file as it is right now. A broken catalog or an unknown model name
//! surfaces as a bare 500; the catalog is trusted to be well formed and
//! clients are trusted to submit names they were shown.

use axum::{extract::State, http::StatusCode, response::Html, Form};
use serde::Deserialize;
use tracing::warn;

use crate::catalog::{load_catalog, Catalog};
use crate::pages;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ModelSelection {
    pub model: String,
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let catalog = load_current_catalog(&state).await?;
    Ok(Html(pages::fitting_page(&catalog, None)))
}

pub async fn select_model(
    State(state): State<AppState>,
    Form(selection): Form<ModelSelection>,
) -> Result<Html<String>, StatusCode> {
    let catalog = load_current_catalog(&state).await?;

    let attributes = match catalog.get(&selection.model) {
        Some(attributes) => attributes,
        None => {
            warn!("Submitted model {:?} is not in the catalog", selection.model);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Html(pages::fitting_page(
        &catalog,
        Some((&selection.model, attributes)),
    )))
}

async fn load_current_catalog(state: &AppState) -> Result<Catalog, StatusCode> {
    match load_catalog(&state.catalog_path).await {
        Ok(catalog) => Ok(catalog),
        Err(e) => {
            warn!("Failed to load model catalog: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
