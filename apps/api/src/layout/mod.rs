// Magazine pagination engine.
// Turns an ordered list of sections into an ordered list of printable pages:
// cover, contents, then each section's pages in section order.
// The engine is pure and synchronous; handlers run it inside tokio::task::spawn_blocking.

pub mod budget;
pub mod fill;
pub mod flow;
pub mod handlers;
pub mod outline;
pub mod paginate;
pub mod paragraphs;
pub mod placement;
pub mod validation;

#[cfg(test)]
mod properties;
#[cfg(test)]
pub(crate) mod test_support;

// Re-export the config type consumed by app state.
pub use budget::LayoutConfig;
