//! Axum route handlers for the Pages API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::layout::budget::LayoutConfig;
use crate::layout::fill::{overflowing, summarize_fill, PageFillAnalysis};
use crate::layout::outline::{build_outline, IssueOutline};
use crate::layout::paginate::{paginate, Page};
use crate::layout::validation::{validate_magazine, ValidationIssue};
use crate::models::magazine::Magazine;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PagesResponse {
    pub pages: Vec<Page>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Debug, Serialize)]
pub struct OutlineResponse {
    pub outline: IssueOutline,
    pub fill: Vec<PageFillAnalysis>,
    pub warnings: Vec<ValidationIssue>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/pages
///
/// Validates a magazine and returns its page sequence.
pub async fn handle_paginate(
    State(state): State<AppState>,
    payload: Result<Json<Magazine>, JsonRejection>,
) -> Result<Json<PagesResponse>, AppError> {
    let Json(magazine) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let warnings = preflight(&magazine)?;

    let (_, pages) = paginate_blocking(magazine, state.layout).await?;
    info!("Paginated into {} pages", pages.len());

    Ok(Json(PagesResponse { pages, warnings }))
}

/// POST /api/v1/pages/outline
///
/// Validates and paginates a magazine, then returns the contents outline with
/// real page numbers and the fill analysis of every text page.
pub async fn handle_outline(
    State(state): State<AppState>,
    payload: Result<Json<Magazine>, JsonRejection>,
) -> Result<Json<OutlineResponse>, AppError> {
    let Json(magazine) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let warnings = preflight(&magazine)?;

    let config = state.layout;
    let (magazine, pages) = paginate_blocking(magazine, config).await?;
    let outline = build_outline(&magazine, &pages);
    let fill = summarize_fill(&pages, &config);

    for page in overflowing(&fill) {
        warn!(
            "Page {} (section '{}', page {} of section) overflows: {}/{} chars",
            page.page_index + 1,
            page.section_id,
            page.page_within_section,
            page.chars_used,
            page.chars_available
        );
    }
    info!(
        "Outline built: {} pages, {} contents entries, {} cover stories",
        outline.total_pages,
        outline.contents.len(),
        outline.cover_stories.len()
    );

    Ok(Json(OutlineResponse {
        outline,
        fill,
        warnings,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Runs validation; blocking errors become a 422, warnings are handed back.
fn preflight(magazine: &Magazine) -> Result<Vec<ValidationIssue>, AppError> {
    let report = validate_magazine(magazine);
    if !report.passed {
        warn!(
            "Magazine '{}' failed validation with {} error(s)",
            magazine.id,
            report.errors.len()
        );
        return Err(AppError::UnprocessableEntity(report.error_summary()));
    }
    debug!(
        "Magazine '{}' validated: {} sections, {} warning(s)",
        magazine.id,
        magazine.sections.len(),
        report.warnings.len()
    );
    Ok(report.warnings)
}

/// Paginates on the blocking pool. The magazine is moved in and handed back so
/// callers can keep using it.
async fn paginate_blocking(
    magazine: Magazine,
    config: LayoutConfig,
) -> Result<(Magazine, Vec<Page>), AppError> {
    tokio::task::spawn_blocking(move || {
        let pages = paginate(&magazine, &config);
        (magazine, pages)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in pagination: {e}")))
}
