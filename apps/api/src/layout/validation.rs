//! Pre-flight checks on a magazine document.
//!
//! The pagination engine accepts anything well-typed, so these checks are the
//! caller's side of the contract. Errors block pagination; warnings travel back
//! to the editor next to the pages.
//!
//! Errors:
//! - a section with an empty id
//! - two sections sharing an id (pages are correlated back to sections by id)
//!
//! Warnings:
//! - empty magazine or section title
//! - a second-page placement on a block with no content
//! - placement settings on an editor letter (they are ignored)
//! - `wrapTextAroundImage` on an image that is not placed in the middle

use std::collections::HashSet;

use serde::Serialize;

use crate::models::magazine::{
    ArticleContent, AuxPlacement, ImagePlacement, Magazine, Section, SectionLayout,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Section the issue belongs to, or `None` for magazine-level issues.
    pub section_id: Option<String>,
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub passed: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// One-line summary of the blocking errors.
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|issue| match &issue.section_id {
                Some(id) => format!("section '{id}' {}: {}", issue.field, issue.reason),
                None => format!("{}: {}", issue.field, issue.reason),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validates a magazine before pagination.
pub fn validate_magazine(magazine: &Magazine) -> ValidationReport {
    let mut issues = Vec::new();

    if magazine.title.trim().is_empty() {
        issues.push(issue(Severity::Warning, None, "title", "Magazine title is empty"));
    }

    let mut seen_ids = HashSet::new();
    for (index, section) in magazine.sections.iter().enumerate() {
        if section.id.trim().is_empty() {
            issues.push(issue(
                Severity::Error,
                None,
                "id",
                &format!("Section {} has an empty id", index + 1),
            ));
        } else if !seen_ids.insert(section.id.as_str()) {
            issues.push(section_issue(
                Severity::Error,
                section,
                "id",
                "Duplicate section id; pages could not be traced back to one section",
            ));
        }

        if section.title.trim().is_empty() {
            issues.push(section_issue(
                Severity::Warning,
                section,
                "title",
                "Section title is empty",
            ));
        }

        match section.layout() {
            SectionLayout::Article(article) => check_article(section, article, &mut issues),
            SectionLayout::EditorLetter(article) => {
                check_editor_letter(section, article, &mut issues);
                check_hero_image(section, article, &mut issues);
            }
            SectionLayout::Advertisement(_) => {}
        }
    }

    let (errors, warnings): (Vec<_>, Vec<_>) = issues
        .into_iter()
        .partition(|issue| issue.severity == Severity::Error);

    ValidationReport {
        passed: errors.is_empty(),
        errors,
        warnings,
    }
}

fn check_article(
    section: &Section,
    article: &ArticleContent,
    issues: &mut Vec<ValidationIssue>,
) {
    if article.key_points_placement.targets_second_page() && !article.has_key_points() {
        issues.push(section_issue(
            Severity::Warning,
            section,
            "keyPointsPlacement",
            "Key points are placed on page 2 but the list is empty",
        ));
    }
    if article.pull_quote_placement.targets_second_page() && !article.has_pull_quote() {
        issues.push(section_issue(
            Severity::Warning,
            section,
            "pullQuotePlacement",
            "Pull quote is placed on page 2 but there is no pull quote",
        ));
    }
    check_hero_image(section, article, issues);
}

fn check_editor_letter(
    section: &Section,
    article: &ArticleContent,
    issues: &mut Vec<ValidationIssue>,
) {
    let customized = article.key_points_placement != AuxPlacement::default()
        || article.pull_quote_placement != AuxPlacement::default();
    if customized {
        issues.push(section_issue(
            Severity::Warning,
            section,
            "keyPointsPlacement",
            "Placement settings are ignored for FROM THE EDITOR sections; \
             key points and pull quote always go on page 2",
        ));
    }
}

fn check_hero_image(
    section: &Section,
    article: &ArticleContent,
    issues: &mut Vec<ValidationIssue>,
) {
    if let Some(image) = &article.hero_image {
        if image.wrap_text && image.placement != ImagePlacement::Middle {
            issues.push(section_issue(
                Severity::Warning,
                section,
                "wrapTextAroundImage",
                "Text only wraps around images placed in the middle",
            ));
        }
    }
}

fn issue(
    severity: Severity,
    section_id: Option<String>,
    field: &str,
    reason: &str,
) -> ValidationIssue {
    ValidationIssue {
        severity,
        section_id,
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn section_issue(
    severity: Severity,
    section: &Section,
    field: &str,
    reason: &str,
) -> ValidationIssue {
    issue(severity, Some(section.id.clone()), field, reason)
}
