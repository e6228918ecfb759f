// src/domain/listing.rs

use crate::domain::text::fold_case;
use chrono::{Datelike, NaiveDate};

/// Read-only view of a record used by the filter engine and the view layer.
///
/// Each record kind picks its own category rule in `matches_category`;
/// everything else is plain field access.
pub trait Listing {
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Location or address; empty when the kind has none.
    fn location(&self) -> &str;

    fn date(&self) -> Option<NaiveDate> {
        None
    }

    fn year(&self) -> Option<i32> {
        self.date().map(|d| d.year())
    }

    fn association_id(&self) -> Option<i64> {
        None
    }

    fn association_name(&self) -> Option<&str> {
        None
    }

    /// Human-readable category text, included in the search haystack.
    fn category_label(&self) -> String;

    /// `value` is already case-folded and non-empty.
    fn matches_category(&self, value: &str) -> bool;

    /// Folded concatenation of every searchable field.
    fn search_text(&self) -> String {
        let joined = [
            self.title(),
            self.description(),
            &self.category_label(),
            self.location(),
            self.association_name().unwrap_or(""),
        ]
        .join(" ");
        fold_case(&joined)
    }
}
