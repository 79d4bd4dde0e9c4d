//! Issue outline: contents listing with real page numbers, plus cover stories.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::layout::paginate::Page;
use crate::models::magazine::{Magazine, SectionKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentsEntry {
    pub section_id: String,
    pub label: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub kind: SectionKind,
    /// 1-based page number of the section's first page.
    pub start_page: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverStory {
    pub section_id: String,
    pub label: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueOutline {
    pub total_pages: usize,
    pub contents: Vec<ContentsEntry>,
    pub cover_stories: Vec<CoverStory>,
}

/// Builds the outline from a magazine and the pages `paginate` produced for it.
///
/// Sections with no pages in `pages` are left out of the contents.
pub fn build_outline(magazine: &Magazine, pages: &[Page]) -> IssueOutline {
    // section index → (first page number, page count)
    let spans: BTreeMap<usize, (usize, usize)> =
        pages.iter().fold(BTreeMap::new(), |mut spans, page| {
            if let Some(article) = page.article() {
                spans
                    .entry(article.section_index)
                    .and_modify(|(_, count)| *count += 1)
                    .or_insert((page.page_number, 1));
            }
            spans
        });

    let contents = magazine
        .sections
        .iter()
        .enumerate()
        .filter_map(|(index, section)| {
            let (start_page, page_count) = *spans.get(&index)?;
            Some(ContentsEntry {
                section_id: section.id.clone(),
                label: section.label.clone(),
                title: section.title.clone(),
                subtitle: section.subtitle.clone(),
                kind: section.kind(),
                start_page,
                page_count,
            })
        })
        .collect();

    let cover_stories = magazine
        .sections
        .iter()
        .filter(|section| section.show_on_cover)
        .map(|section| CoverStory {
            section_id: section.id.clone(),
            label: section.label.clone(),
            title: section.title.clone(),
        })
        .collect();

    IssueOutline {
        total_pages: pages.len(),
        contents,
        cover_stories,
    }
}
