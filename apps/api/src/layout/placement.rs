//! Auxiliary content placement. Decides which page of a section shows key points and
//! the pull quote, and in what order.
//!
//! Placement is policy, not capacity: a block's page is decided by its placement
//! setting alone, never by how much room the text flow left.

use serde::Serialize;

use crate::models::magazine::{ArticleContent, AuxPlacement};

/// An auxiliary block that can accompany article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuxBlock {
    KeyPoints,
    PullQuote,
}

/// Position of a slot on its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotPosition {
    Top,
    End,
}

impl AuxPlacement {
    /// Page within the section (1-based) this placement targets, if any.
    pub fn target_page(self) -> Option<usize> {
        match self {
            AuxPlacement::FirstPageEnd => Some(1),
            AuxPlacement::SecondPageTop | AuxPlacement::SecondPageEnd => Some(2),
            AuxPlacement::Hidden => None,
        }
    }

    pub fn is_visible_on(self, page_within_section: usize) -> bool {
        self.target_page() == Some(page_within_section)
    }

    pub fn targets_second_page(self) -> bool {
        self.target_page() == Some(2)
    }

    fn position(self) -> Option<SlotPosition> {
        match self {
            AuxPlacement::SecondPageTop => Some(SlotPosition::Top),
            AuxPlacement::FirstPageEnd | AuxPlacement::SecondPageEnd => Some(SlotPosition::End),
            AuxPlacement::Hidden => None,
        }
    }
}

/// Auxiliary blocks visible on one page, in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxLayout {
    pub show_key_points: bool,
    pub show_pull_quote: bool,
    /// Blocks rendered above the body text.
    #[serde(rename = "auxTop")]
    pub top: Vec<AuxBlock>,
    /// Blocks rendered below the body text.
    #[serde(rename = "auxEnd")]
    pub end: Vec<AuxBlock>,
}

impl AuxLayout {
    /// No auxiliary content on this page.
    pub fn hidden() -> Self {
        AuxLayout::default()
    }

    /// Second page of an editor letter: both blocks at the top, whatever the
    /// section's placement settings say.
    pub fn editor_letter_extras(key_points_first: bool) -> Self {
        AuxLayout {
            show_key_points: true,
            show_pull_quote: true,
            top: ordered(true, true, key_points_first),
            end: Vec::new(),
        }
    }
}

/// Placement settings of one article, with defaults already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxPolicy {
    pub key_points: AuxPlacement,
    pub pull_quote: AuxPlacement,
    pub key_points_first: bool,
}

impl AuxPolicy {
    pub fn for_article(article: &ArticleContent) -> Self {
        AuxPolicy {
            key_points: article.key_points_placement,
            pull_quote: article.pull_quote_placement,
            key_points_first: article.key_points_first,
        }
    }

    /// Visible blocks on the given page within the section.
    pub fn layout_for_page(&self, page_within_section: usize) -> AuxLayout {
        let show_key_points = self.key_points.is_visible_on(page_within_section);
        let show_pull_quote = self.pull_quote.is_visible_on(page_within_section);

        let in_position = |position: SlotPosition| {
            ordered(
                show_key_points && self.key_points.position() == Some(position),
                show_pull_quote && self.pull_quote.position() == Some(position),
                self.key_points_first,
            )
        };

        AuxLayout {
            show_key_points,
            show_pull_quote,
            top: in_position(SlotPosition::Top),
            end: in_position(SlotPosition::End),
        }
    }

    /// True if either block targets page 2, so page 2 must exist even when the
    /// body text fits on one page. Placement alone decides; empty blocks are
    /// reported by validation.
    pub fn requires_second_page(&self) -> bool {
        self.key_points.targets_second_page() || self.pull_quote.targets_second_page()
    }
}

fn ordered(key_points: bool, pull_quote: bool, key_points_first: bool) -> Vec<AuxBlock> {
    let mut blocks = Vec::with_capacity(2);
    if key_points {
        blocks.push(AuxBlock::KeyPoints);
    }
    if pull_quote {
        blocks.push(AuxBlock::PullQuote);
    }
    if !key_points_first {
        blocks.reverse();
    }
    blocks
}
