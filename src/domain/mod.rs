pub mod activity;
pub mod association;
pub mod calendar;
pub mod dates;
pub mod document;
pub mod listing;
pub mod region;
pub mod text;

pub use activity::Activity;
pub use association::Association;
pub use document::{Document, DocumentKind};
pub use listing::Listing;
