//! Pagination engine — turns a magazine into an ordered list of page descriptors.
//!
//! # Page sequence
//! 1. cover (no payload; the renderer reads the magazine's cover metadata)
//! 2. contents (no payload; the renderer lists `magazine.sections`)
//! 3. one or more pages per section, in section order
//!
//! Per section:
//! - advertisement → exactly one page, never split
//! - editor letter → all body text on page 1; page 2 only if there are key
//!   points or a pull quote, and it shows both
//! - article → greedy text flow, then auxiliary placement; a second page is
//!   synthesized when placement targets it and the text fit on one page
//!
//! `paginate` is pure and total: no I/O, no shared state, and every input
//! yields at least the cover and contents pages. Callers memoize on document
//! identity if they need to.

use serde::Serialize;

use crate::layout::budget::LayoutConfig;
use crate::layout::flow::{flow_paragraphs, PageBuffer};
use crate::layout::paragraphs::split_paragraphs;
use crate::layout::placement::{AuxLayout, AuxPolicy};
use crate::models::magazine::{
    AdLayout, AdvertisementContent, ArticleContent, Magazine, Section, SectionKind, SectionLayout,
};

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// One emitted page. `index` is dense and 0-based; `page_number` is `index + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub index: usize,
    pub page_number: usize,
    #[serde(flatten)]
    pub content: PageContent,
}

impl Page {
    pub fn article(&self) -> Option<&ArticlePage> {
        match &self.content {
            PageContent::Article { article } => Some(article),
            PageContent::Cover | PageContent::Contents => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PageContent {
    Cover,
    Contents,
    Article { article: ArticlePage },
}

/// A page belonging to a section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    /// Id of the owning section, preserved so callers can correlate pages back.
    pub section_id: String,
    /// Position of the owning section in `magazine.sections`.
    pub section_index: usize,
    pub section_label: String,
    pub section_title: String,
    pub section_kind: SectionKind,
    pub is_continuation: bool,
    /// 1-based page index relative to the start of the section.
    pub page_within_section: usize,
    pub paragraphs: Vec<String>,
    #[serde(flatten)]
    pub aux: AuxLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_layout: Option<AdLayout>,
}

impl ArticlePage {
    fn new(
        section_index: usize,
        section: &Section,
        page_within_section: usize,
        paragraphs: Vec<String>,
        aux: AuxLayout,
    ) -> Self {
        ArticlePage {
            section_id: section.id.clone(),
            section_index,
            section_label: section.label.clone(),
            section_title: section.title.clone(),
            section_kind: section.kind(),
            is_continuation: page_within_section > 1,
            page_within_section,
            paragraphs,
            aux,
            ad_layout: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Paginates a magazine. Deterministic; the input is never modified.
pub fn paginate(magazine: &Magazine, config: &LayoutConfig) -> Vec<Page> {
    let front_matter = [PageContent::Cover, PageContent::Contents];

    let section_pages = magazine
        .sections
        .iter()
        .enumerate()
        .flat_map(|(section_index, section)| section_pages(section_index, section, config))
        .map(|article| PageContent::Article { article });

    front_matter
        .into_iter()
        .chain(section_pages)
        .enumerate()
        .map(|(index, content)| Page {
            index,
            page_number: index + 1,
            content,
        })
        .collect()
}

/// Pages for one section, numbered from 1 within the section.
pub fn section_pages(
    section_index: usize,
    section: &Section,
    config: &LayoutConfig,
) -> Vec<ArticlePage> {
    match section.layout() {
        SectionLayout::Advertisement(ad) => vec![advertisement_page(section_index, section, ad)],
        SectionLayout::EditorLetter(article) => editor_letter_pages(section_index, section, article),
        SectionLayout::Article(article) => article_pages(section_index, section, article, config),
    }
}

fn advertisement_page(
    section_index: usize,
    section: &Section,
    ad: &AdvertisementContent,
) -> ArticlePage {
    ArticlePage {
        ad_layout: Some(ad.layout),
        ..ArticlePage::new(section_index, section, 1, Vec::new(), AuxLayout::hidden())
    }
}

fn editor_letter_pages(
    section_index: usize,
    section: &Section,
    article: &ArticleContent,
) -> Vec<ArticlePage> {
    // The letter is designed to fit one page, so its body is never flowed.
    let mut pages = vec![ArticlePage::new(
        section_index,
        section,
        1,
        split_paragraphs(&article.body_markdown),
        AuxLayout::hidden(),
    )];

    if article.has_key_points() || article.has_pull_quote() {
        pages.push(ArticlePage::new(
            section_index,
            section,
            2,
            Vec::new(),
            AuxLayout::editor_letter_extras(article.key_points_first),
        ));
    }
    pages
}

fn article_pages(
    section_index: usize,
    section: &Section,
    article: &ArticleContent,
    config: &LayoutConfig,
) -> Vec<ArticlePage> {
    let policy = AuxPolicy::for_article(article);
    let mut buffers = flow_paragraphs(split_paragraphs(&article.body_markdown), config);

    // An empty body still gets its opening page.
    if buffers.is_empty() {
        buffers.push(PageBuffer::default());
    }
    // Placement wins over text length: page 2 exists if a block targets it.
    if buffers.len() == 1 && policy.requires_second_page() {
        buffers.push(PageBuffer::default());
    }

    buffers
        .into_iter()
        .zip(1..)
        .map(|(buffer, page_within_section)| {
            ArticlePage::new(
                section_index,
                section,
                page_within_section,
                buffer.paragraphs,
                policy.layout_for_page(page_within_section),
            )
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
