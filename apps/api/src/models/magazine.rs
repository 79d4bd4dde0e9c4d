//! Magazine document model, as authored in the browser editor.
#![allow(dead_code)]
//!
//! The wire shape follows the editor's JSON: camelCase keys, kebab-case enum
//! values, hero image and advertisement fields flat on the section, and an
//! optional `kind` that defaults to `article`. Internally a section is a typed
//! variant so layout code never has to probe for field presence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label that marks an article as the editor's letter.
pub const EDITOR_LETTER_LABEL: &str = "FROM THE EDITOR";

// ────────────────────────────────────────────────────────────────────────────
// Magazine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverImageStyle {
    #[default]
    None,
    FullBleed,
    Banner,
}

/// A complete magazine issue. Read-only input to the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Magazine {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub tagline: Option<String>,
    pub issue_number: String,
    pub issue_label: Option<String>,
    pub theme_title: Option<String>,
    pub theme_summary: Option<String>,
    pub publisher_name: String,
    pub publisher_website: Option<String>,
    pub landing_page_url: Option<String>,
    pub publication_date: NaiveDate,
    pub language: Option<String>,
    pub accent_color_hex: Option<String>,
    pub color_palette: Option<ColorPalette>,
    pub publisher_logo_url: Option<String>,
    #[serde(default)]
    pub logo_library: Vec<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub cover_image_style: CoverImageStyle,
    pub cover_text_color: Option<String>,
    pub cover_accent_color: Option<String>,
    /// Order is significant: it is the page order and the contents order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

// ────────────────────────────────────────────────────────────────────────────
// Section enums
// ────────────────────────────────────────────────────────────────────────────

/// Where an auxiliary block (key points, pull quote) is placed within its section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuxPlacement {
    #[default]
    FirstPageEnd,
    SecondPageTop,
    SecondPageEnd,
    #[serde(rename = "none")]
    Hidden,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImagePlacement {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageAlignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSource {
    Upload,
    Ai,
    Url,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdLayout {
    #[default]
    FullPage,
    HalfTop,
    HalfBottom,
}

/// Number of text columns on an article page. Only 1–3 are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColumnCount {
    #[default]
    One,
    Two,
    Three,
}

impl TryFrom<u8> for ColumnCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ColumnCount::One),
            2 => Ok(ColumnCount::Two),
            3 => Ok(ColumnCount::Three),
            other => Err(format!("columnCount must be 1, 2 or 3, got {other}")),
        }
    }
}

impl From<ColumnCount> for u8 {
    fn from(value: ColumnCount) -> Self {
        match value {
            ColumnCount::One => 1,
            ColumnCount::Two => 2,
            ColumnCount::Three => 3,
        }
    }
}

/// Layout treatment of a section, derived from its content variant and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Article,
    EditorLetter,
    Advertisement,
}

// ────────────────────────────────────────────────────────────────────────────
// Section content
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroImage {
    pub url: String,
    pub alt: Option<String>,
    pub source: Option<ImageSource>,
    pub prompt: Option<String>,
    pub placement: ImagePlacement,
    pub size: ImageSize,
    pub alignment: ImageAlignment,
    /// Only meaningful for middle placement.
    pub wrap_text: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    pub body_markdown: String,
    pub key_points: Vec<String>,
    pub pull_quote: Option<String>,
    pub stats_line: Option<String>,
    pub hero_image: Option<HeroImage>,
    pub column_count: ColumnCount,
    pub key_points_placement: AuxPlacement,
    pub pull_quote_placement: AuxPlacement,
    /// Render order when both auxiliary blocks share a slot.
    pub key_points_first: bool,
}

impl Default for ArticleContent {
    fn default() -> Self {
        ArticleContent {
            body_markdown: String::new(),
            key_points: Vec::new(),
            pull_quote: None,
            stats_line: None,
            hero_image: None,
            column_count: ColumnCount::default(),
            key_points_placement: AuxPlacement::default(),
            pull_quote_placement: AuxPlacement::default(),
            key_points_first: true,
        }
    }
}

impl ArticleContent {
    pub fn has_key_points(&self) -> bool {
        !self.key_points.is_empty()
    }

    /// Any non-empty string counts, whitespace included, as the editor does.
    pub fn has_pull_quote(&self) -> bool {
        self.pull_quote.as_deref().is_some_and(|quote| !quote.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvertisementContent {
    pub layout: AdLayout,
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
    pub headline: Option<String>,
    pub body: Option<String>,
    pub call_to_action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Article(ArticleContent),
    Advertisement(AdvertisementContent),
}

/// Borrowed view of a section, classified by how the layout engine treats it.
#[derive(Debug, Clone, Copy)]
pub enum SectionLayout<'a> {
    Article(&'a ArticleContent),
    EditorLetter(&'a ArticleContent),
    Advertisement(&'a AdvertisementContent),
}

impl SectionLayout<'_> {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionLayout::Article(_) => SectionKind::Article,
            SectionLayout::EditorLetter(_) => SectionKind::EditorLetter,
            SectionLayout::Advertisement(_) => SectionKind::Advertisement,
        }
    }
}

/// One content unit of the magazine, paginated independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SectionWire", into = "SectionWire")]
pub struct Section {
    pub id: String,
    pub label: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub show_on_cover: bool,
    pub content: SectionContent,
}

impl Section {
    pub fn is_editor_letter(&self) -> bool {
        self.label.trim().to_uppercase() == EDITOR_LETTER_LABEL
    }

    pub fn layout(&self) -> SectionLayout<'_> {
        match &self.content {
            SectionContent::Advertisement(ad) => SectionLayout::Advertisement(ad),
            SectionContent::Article(article) if self.is_editor_letter() => {
                SectionLayout::EditorLetter(article)
            }
            SectionContent::Article(article) => SectionLayout::Article(article),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.layout().kind()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire representation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum WireKind {
    #[default]
    Article,
    Advertisement,
}

/// Flat section shape exchanged with the editor. Missing strings decode as
/// empty so a half-written document still paginates; validation reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SectionWire {
    kind: Option<WireKind>,
    id: String,
    label: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    show_on_cover: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    body_markdown: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    key_points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_image_source: Option<ImageSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_image_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_image_placement: Option<ImagePlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_image_size: Option<ImageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_image_alignment: Option<ImageAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wrap_text_around_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_count: Option<ColumnCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_points_placement: Option<AuxPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_quote_placement: Option<AuxPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_points_first: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    ad_layout: Option<AdLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ad_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ad_alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ad_headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ad_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ad_call_to_action: Option<String>,
}

impl From<SectionWire> for Section {
    fn from(wire: SectionWire) -> Self {
        let content = match wire.kind.unwrap_or_default() {
            WireKind::Advertisement => SectionContent::Advertisement(AdvertisementContent {
                layout: wire.ad_layout.unwrap_or_default(),
                image_url: wire.ad_image_url,
                alt_text: wire.ad_alt_text,
                headline: wire.ad_headline,
                body: wire.ad_body,
                call_to_action: wire.ad_call_to_action,
            }),
            WireKind::Article => {
                // The editor stores a cleared image as an empty URL.
                let hero_image = wire
                    .hero_image_url
                    .filter(|url| !url.trim().is_empty())
                    .map(|url| HeroImage {
                        url,
                        alt: wire.hero_image_alt,
                        source: wire.hero_image_source,
                        prompt: wire.hero_image_prompt,
                        placement: wire.hero_image_placement.unwrap_or_default(),
                        size: wire.hero_image_size.unwrap_or_default(),
                        alignment: wire.hero_image_alignment.unwrap_or_default(),
                        wrap_text: wire.wrap_text_around_image.unwrap_or(false),
                    });

                SectionContent::Article(ArticleContent {
                    body_markdown: wire.body_markdown.unwrap_or_default(),
                    key_points: wire.key_points,
                    pull_quote: wire.pull_quote,
                    stats_line: wire.stats_line,
                    hero_image,
                    column_count: wire.column_count.unwrap_or_default(),
                    key_points_placement: wire.key_points_placement.unwrap_or_default(),
                    pull_quote_placement: wire.pull_quote_placement.unwrap_or_default(),
                    key_points_first: wire.key_points_first.unwrap_or(true),
                })
            }
        };

        Section {
            id: wire.id,
            label: wire.label,
            title: wire.title,
            subtitle: wire.subtitle,
            show_on_cover: wire.show_on_cover,
            content,
        }
    }
}

impl From<Section> for SectionWire {
    fn from(section: Section) -> Self {
        let mut wire = SectionWire {
            id: section.id,
            label: section.label,
            title: section.title,
            subtitle: section.subtitle,
            show_on_cover: section.show_on_cover,
            ..SectionWire::default()
        };

        match section.content {
            SectionContent::Article(article) => {
                wire.kind = Some(WireKind::Article);
                wire.body_markdown = Some(article.body_markdown);
                wire.key_points = article.key_points;
                wire.pull_quote = article.pull_quote;
                wire.stats_line = article.stats_line;
                wire.column_count = Some(article.column_count);
                wire.key_points_placement = Some(article.key_points_placement);
                wire.pull_quote_placement = Some(article.pull_quote_placement);
                wire.key_points_first = Some(article.key_points_first);
                if let Some(image) = article.hero_image {
                    wire.hero_image_url = Some(image.url);
                    wire.hero_image_alt = image.alt;
                    wire.hero_image_source = image.source;
                    wire.hero_image_prompt = image.prompt;
                    wire.hero_image_placement = Some(image.placement);
                    wire.hero_image_size = Some(image.size);
                    wire.hero_image_alignment = Some(image.alignment);
                    wire.wrap_text_around_image = Some(image.wrap_text);
                }
            }
            SectionContent::Advertisement(ad) => {
                wire.kind = Some(WireKind::Advertisement);
                wire.ad_layout = Some(ad.layout);
                wire.ad_image_url = ad.image_url;
                wire.ad_alt_text = ad.alt_text;
                wire.ad_headline = ad.headline;
                wire.ad_body = ad.body;
                wire.ad_call_to_action = ad.call_to_action;
            }
        }

        wire
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
