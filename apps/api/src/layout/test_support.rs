//! Shared fixtures for layout tests.

use chrono::NaiveDate;

use crate::models::magazine::{
    AdLayout, AdvertisementContent, ArticleContent, CoverImageStyle, Magazine, Section,
    SectionContent,
};

pub fn magazine(sections: Vec<Section>) -> Magazine {
    Magazine {
        id: "test-magazine".to_string(),
        title: "Test Magazine".to_string(),
        subtitle: None,
        tagline: None,
        issue_number: "01".to_string(),
        issue_label: None,
        theme_title: None,
        theme_summary: None,
        publisher_name: "Test Publisher".to_string(),
        publisher_website: None,
        landing_page_url: None,
        publication_date: NaiveDate::from_ymd_opt(2025, 11, 22).expect("valid date"),
        language: None,
        accent_color_hex: None,
        color_palette: None,
        publisher_logo_url: None,
        logo_library: Vec::new(),
        cover_image_url: None,
        cover_image_style: CoverImageStyle::None,
        cover_text_color: None,
        cover_accent_color: None,
        sections,
    }
}

/// Article with three key points, a pull quote and default placements.
pub fn article(id: &str, body: &str) -> Section {
    Section {
        id: id.to_string(),
        label: "DOCUMENT SUMMARY".to_string(),
        title: format!("Section {id}"),
        subtitle: None,
        show_on_cover: false,
        content: SectionContent::Article(ArticleContent {
            body_markdown: body.to_string(),
            key_points: vec![
                "Key point 1".to_string(),
                "Key point 2".to_string(),
                "Key point 3".to_string(),
            ],
            pull_quote: Some("This is a test pull quote.".to_string()),
            ..ArticleContent::default()
        }),
    }
}

pub fn editor_letter(id: &str, body: &str) -> Section {
    Section {
        label: "From The Editor".to_string(),
        ..article(id, body)
    }
}

pub fn advertisement(id: &str) -> Section {
    Section {
        id: id.to_string(),
        label: "Advertisement".to_string(),
        title: format!("Sponsor {id}"),
        subtitle: None,
        show_on_cover: false,
        content: SectionContent::Advertisement(AdvertisementContent {
            layout: AdLayout::FullPage,
            headline: Some("Fresh coffee, every morning".to_string()),
            ..AdvertisementContent::default()
        }),
    }
}

pub fn short_body() -> String {
    "Short body content that fits on one page.\n\nA second, equally short paragraph.".to_string()
}

/// `count` paragraphs of exactly `len` characters each.
pub fn long_body(count: usize, len: usize) -> String {
    (0..count)
        .map(|i| {
            let marker = format!("p{i} ");
            format!("{marker}{}", "w".repeat(len.saturating_sub(marker.len())))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
