//! Greedy text flow: packs paragraphs into page buffers under the character budget.
//!
//! The flow is a fold over paragraphs. Each step either appends the paragraph to
//! the open buffer or closes that buffer and opens a new one; buffers are never
//! revisited, so the pass is linear and has no backtracking.
//!
//! Two rules guarantee progress:
//! - an empty buffer is never closed, and
//! - a paragraph that alone exceeds the budget still lands on a page (its own).

use crate::layout::budget::LayoutConfig;

/// Paragraphs assigned to one page, with their accumulated cost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageBuffer {
    pub paragraphs: Vec<String>,
    pub chars_used: usize,
}

impl PageBuffer {
    fn opened_with(paragraph: String, cost: usize) -> Self {
        PageBuffer {
            paragraphs: vec![paragraph],
            chars_used: cost,
        }
    }

    fn with(mut self, paragraph: String, cost: usize) -> Self {
        self.paragraphs.push(paragraph);
        self.chars_used = self.chars_used.saturating_add(cost);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Flows paragraphs into pages. Returns no buffers for no paragraphs.
pub fn flow_paragraphs<I>(paragraphs: I, config: &LayoutConfig) -> Vec<PageBuffer>
where
    I: IntoIterator<Item = String>,
{
    let (mut closed, open) = paragraphs.into_iter().fold(
        (Vec::new(), PageBuffer::default()),
        |(mut closed, open), paragraph| {
            let cost = config.paragraph_cost(&paragraph);
            if !open.is_empty() && config.would_overflow(open.chars_used, cost) {
                closed.push(open);
                (closed, PageBuffer::opened_with(paragraph, cost))
            } else {
                (closed, open.with(paragraph, cost))
            }
        },
    );

    if !open.is_empty() {
        closed.push(open);
    }
    closed
}
