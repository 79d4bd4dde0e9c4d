//! Property tests for the pagination engine.

use proptest::prelude::*;

use crate::layout::budget::LayoutConfig;
use crate::layout::flow::flow_paragraphs;
use crate::layout::paginate::{paginate, Page};
use crate::layout::paragraphs::split_paragraphs;
use crate::layout::test_support::{advertisement, article, magazine};
use crate::models::magazine::{AdLayout, AuxPlacement, Section, SectionContent, SectionKind};

fn placement_strategy() -> impl Strategy<Value = AuxPlacement> {
    prop_oneof![
        Just(AuxPlacement::FirstPageEnd),
        Just(AuxPlacement::SecondPageTop),
        Just(AuxPlacement::SecondPageEnd),
        Just(AuxPlacement::Hidden),
    ]
}

fn ad_layout_strategy() -> impl Strategy<Value = AdLayout> {
    prop_oneof![
        Just(AdLayout::FullPage),
        Just(AdLayout::HalfTop),
        Just(AdLayout::HalfBottom),
    ]
}

/// Body text built from paragraphs of the given lengths.
fn body_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(1usize..1500, 0..12).prop_map(|lengths| {
        lengths
            .iter()
            .enumerate()
            .map(|(i, len)| format!("{i}{}", "a".repeat(*len)))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

prop_compose! {
    fn article_strategy()(
        body in body_strategy(),
        key_points in 0usize..4,
        pull_quote in any::<bool>(),
        key_points_placement in placement_strategy(),
        pull_quote_placement in placement_strategy(),
        key_points_first in any::<bool>(),
        editor in prop::bool::weighted(0.2),
    ) -> Section {
        let mut section = article("placeholder", &body);
        if editor {
            section.label = "FROM THE EDITOR".to_string();
        }
        if let SectionContent::Article(content) = &mut section.content {
            content.key_points = (0..key_points).map(|i| format!("point {i}")).collect();
            content.pull_quote = pull_quote.then(|| "A quote".to_string());
            content.key_points_placement = key_points_placement;
            content.pull_quote_placement = pull_quote_placement;
            content.key_points_first = key_points_first;
        }
        section
    }
}

prop_compose! {
    fn advertisement_strategy()(layout in ad_layout_strategy()) -> Section {
        let mut section = advertisement("placeholder");
        if let SectionContent::Advertisement(ad) = &mut section.content {
            ad.layout = layout;
            ad.body = Some("x".repeat(10_000));
        }
        section
    }
}

fn sections_strategy() -> impl Strategy<Value = Vec<Section>> {
    prop::collection::vec(
        prop_oneof![4 => article_strategy(), 1 => advertisement_strategy()],
        0..8,
    )
    .prop_map(|sections| {
        sections
            .into_iter()
            .enumerate()
            .map(|(i, section)| Section {
                id: format!("section-{i}"),
                ..section
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (50usize..6000, 0usize..4).prop_map(|(max_chars_per_page, paragraph_spacing_chars)| {
        LayoutConfig {
            max_chars_per_page,
            paragraph_spacing_chars,
        }
    })
}

fn section_indices(pages: &[Page]) -> Vec<usize> {
    pages
        .iter()
        .filter_map(|p| p.article().map(|a| a.section_index))
        .collect()
}

proptest! {
    #[test]
    fn prop_always_cover_and_contents(
        sections in sections_strategy(),
        config in config_strategy(),
    ) {
        let pages = paginate(&magazine(sections), &config);
        prop_assert!(pages.len() >= 2);
        prop_assert!(pages[0].article().is_none());
        prop_assert!(pages[1].article().is_none());
    }

    #[test]
    fn prop_indices_are_dense(sections in sections_strategy(), config in config_strategy()) {
        let pages = paginate(&magazine(sections), &config);
        for (i, page) in pages.iter().enumerate() {
            prop_assert_eq!(page.index, i);
            prop_assert_eq!(page.page_number, i + 1);
        }
    }

    #[test]
    fn prop_sections_are_contiguous_and_ordered(
        sections in sections_strategy(),
        config in config_strategy(),
    ) {
        let section_count = sections.len();
        let pages = paginate(&magazine(sections), &config);
        let mut runs = section_indices(&pages);
        // Non-decreasing order means each section forms one contiguous run.
        prop_assert!(runs.windows(2).all(|w| w[0] <= w[1]));
        runs.dedup();
        prop_assert_eq!(runs, (0..section_count).collect::<Vec<_>>());
    }

    #[test]
    fn prop_page_within_section_counts_from_one(
        sections in sections_strategy(),
        config in config_strategy(),
    ) {
        let pages = paginate(&magazine(sections), &config);
        let articles: Vec<_> = pages.iter().filter_map(Page::article).collect();
        for pair in articles.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if prev.section_index == next.section_index {
                prop_assert_eq!(next.page_within_section, prev.page_within_section + 1);
            } else {
                prop_assert_eq!(next.page_within_section, 1);
            }
            prop_assert_eq!(next.is_continuation, next.page_within_section > 1);
        }
    }

    #[test]
    fn prop_advertisements_are_never_split(
        sections in sections_strategy(),
        config in config_strategy(),
    ) {
        let pages = paginate(&magazine(sections.clone()), &config);
        for (index, section) in sections.iter().enumerate() {
            if section.kind() == SectionKind::Advertisement {
                let count = section_indices(&pages).iter().filter(|i| **i == index).count();
                prop_assert_eq!(count, 1);
            }
        }
    }

    #[test]
    fn prop_auxiliary_blocks_appear_at_most_once(
        sections in sections_strategy(),
        config in config_strategy(),
    ) {
        let section_count = sections.len();
        let pages = paginate(&magazine(sections), &config);
        for index in 0..section_count {
            let mine: Vec<_> = pages
                .iter()
                .filter_map(Page::article)
                .filter(|a| a.section_index == index)
                .collect();
            prop_assert!(mine.iter().filter(|a| a.aux.show_key_points).count() <= 1);
            prop_assert!(mine.iter().filter(|a| a.aux.show_pull_quote).count() <= 1);
        }
    }

    #[test]
    fn prop_article_text_is_preserved(
        sections in sections_strategy(),
        config in config_strategy(),
    ) {
        let pages = paginate(&magazine(sections.clone()), &config);
        for (index, section) in sections.iter().enumerate() {
            if let SectionContent::Article(content) = &section.content {
                let placed: Vec<String> = pages
                    .iter()
                    .filter_map(Page::article)
                    .filter(|a| a.section_index == index)
                    .flat_map(|a| a.paragraphs.iter().cloned())
                    .collect();
                prop_assert_eq!(placed, split_paragraphs(&content.body_markdown));
            }
        }
    }

    #[test]
    fn prop_second_page_exists_when_placement_needs_it(
        section in article_strategy(),
        config in config_strategy(),
    ) {
        let pages = paginate(&magazine(vec![section.clone()]), &config);
        let article_count = pages.len() - 2;
        if let SectionContent::Article(content) = &section.content {
            let needs_second = content.key_points_placement.targets_second_page()
                || content.pull_quote_placement.targets_second_page();
            if section.kind() == SectionKind::Article && needs_second {
                prop_assert!(article_count >= 2);
                let second = pages[3].article().expect("second article page");
                prop_assert_eq!(
                    second.aux.show_key_points,
                    content.key_points_placement.targets_second_page()
                );
            }
        }
    }

    #[test]
    fn prop_flow_is_greedy(
        lengths in prop::collection::vec(1usize..3000, 0..30),
        config in config_strategy(),
    ) {
        let paragraphs: Vec<String> = lengths.iter().map(|len| "a".repeat(*len)).collect();
        let buffers = flow_paragraphs(paragraphs.clone(), &config);

        let placed: Vec<String> = buffers.iter().flat_map(|b| b.paragraphs.clone()).collect();
        prop_assert_eq!(placed, paragraphs);

        for buffer in &buffers {
            prop_assert!(!buffer.is_empty());
            prop_assert_eq!(buffer.chars_used, config.page_cost(&buffer.paragraphs));
            if buffer.paragraphs.len() > 1 {
                prop_assert!(buffer.chars_used <= config.max_chars_per_page);
            }
        }
        // A page was only closed because the next paragraph did not fit on it.
        for pair in buffers.windows(2) {
            let next_cost = config.paragraph_cost(&pair[1].paragraphs[0]);
            prop_assert!(config.would_overflow(pair[0].chars_used, next_cost));
        }
    }

    #[test]
    fn prop_paginate_is_idempotent(sections in sections_strategy(), config in config_strategy()) {
        let m = magazine(sections);
        prop_assert_eq!(paginate(&m, &config), paginate(&m, &config));
    }
}
