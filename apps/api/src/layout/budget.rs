//! Character budget per article page.
//!
//! Capacity is approximated by character counts, not rendered glyph metrics.
//! The budget is a layout heuristic that has never been calibrated against real
//! typography, so it is a tunable parameter passed into the engine rather than
//! a constant baked into it.

use serde::{Deserialize, Serialize};

/// Default characters that fit on one article page.
pub const DEFAULT_MAX_CHARS_PER_PAGE: usize = 2200;

/// Characters charged per paragraph for the blank line that separates it.
pub const DEFAULT_PARAGRAPH_SPACING_CHARS: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Layout configuration
// ────────────────────────────────────────────────────────────────────────────

/// Capacity parameters for the text flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Character budget of a single article page.
    pub max_chars_per_page: usize,
    /// Extra characters charged for each paragraph break.
    pub paragraph_spacing_chars: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        default_layout_config()
    }
}

/// Returns the default layout config (2200 characters, 2 per paragraph break).
pub fn default_layout_config() -> LayoutConfig {
    LayoutConfig {
        max_chars_per_page: DEFAULT_MAX_CHARS_PER_PAGE,
        paragraph_spacing_chars: DEFAULT_PARAGRAPH_SPACING_CHARS,
    }
}

impl LayoutConfig {
    /// Cost of placing one paragraph on a page.
    ///
    /// Counts Unicode scalar values, so accented text costs the same as ASCII.
    pub fn paragraph_cost(&self, paragraph: &str) -> usize {
        paragraph
            .chars()
            .count()
            .saturating_add(self.paragraph_spacing_chars)
    }

    /// Total cost of a page's paragraphs.
    pub fn page_cost<S: AsRef<str>>(&self, paragraphs: &[S]) -> usize {
        paragraphs
            .iter()
            .map(|p| self.paragraph_cost(p.as_ref()))
            .fold(0, usize::saturating_add)
    }

    /// True if a paragraph of this cost cannot be added to a page already holding `used`.
    pub fn would_overflow(&self, used: usize, cost: usize) -> bool {
        used.saturating_add(cost) > self.max_chars_per_page
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
