//! Presentation state derived from records and the active filter.

pub mod highlight;
mod panel;
pub mod summary;

pub use highlight::Highlighted;
pub use panel::{ListingPanel, PanelItem, Placeholder};
pub use summary::Noun;
