//! Page Fill Analysis — how much of the character budget each article page uses.
//!
//! The text flow never splits a paragraph, so a page can overflow only when it
//! holds a single paragraph larger than the budget, or when it is page 1 of an
//! editor letter (whose body is never flowed). The editor surfaces these as
//! warnings so the author can break the text up.
//!
//! # Verdicts
//! - no paragraphs         → Empty (synthesized auxiliary pages, empty bodies)
//! - fill < 50%            → Light
//! - 50% ≤ fill ≤ 100%     → Balanced
//! - fill > 100%           → Overflow

use serde::Serialize;

use crate::layout::budget::LayoutConfig;
use crate::layout::paginate::{ArticlePage, Page};
use crate::models::magazine::SectionKind;

/// Below this fill ratio a page with text is reported as light.
const LIGHT_FILL_RATIO: f32 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillVerdict {
    Empty,
    Light,
    Balanced,
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFillAnalysis {
    pub page_index: usize,
    pub section_id: String,
    pub page_within_section: usize,
    pub chars_used: usize,
    pub chars_available: usize,
    pub fill_ratio: f32,
    pub verdict: FillVerdict,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes the fill of one article page.
pub fn analyze_page_fill(
    page_index: usize,
    article: &ArticlePage,
    config: &LayoutConfig,
) -> PageFillAnalysis {
    let chars_used = config.page_cost(&article.paragraphs);
    let chars_available = config.max_chars_per_page;
    let fill_ratio = if chars_available == 0 {
        0.0
    } else {
        chars_used as f32 / chars_available as f32
    };

    let verdict = if article.paragraphs.is_empty() {
        FillVerdict::Empty
    } else if chars_used > chars_available {
        FillVerdict::Overflow
    } else if fill_ratio < LIGHT_FILL_RATIO {
        FillVerdict::Light
    } else {
        FillVerdict::Balanced
    };

    PageFillAnalysis {
        page_index,
        section_id: article.section_id.clone(),
        page_within_section: article.page_within_section,
        chars_used,
        chars_available,
        fill_ratio,
        verdict,
    }
}

/// Fill analyses for every page that carries body text. Advertisements are skipped.
pub fn summarize_fill(pages: &[Page], config: &LayoutConfig) -> Vec<PageFillAnalysis> {
    pages
        .iter()
        .filter_map(|page| page.article().map(|article| (page.index, article)))
        .filter(|(_, article)| article.section_kind != SectionKind::Advertisement)
        .map(|(index, article)| analyze_page_fill(index, article, config))
        .collect()
}

/// Pages that hold more text than the budget allows.
pub fn overflowing(analyses: &[PageFillAnalysis]) -> impl Iterator<Item = &PageFillAnalysis> {
    analyses
        .iter()
        .filter(|analysis| analysis.verdict == FillVerdict::Overflow)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
