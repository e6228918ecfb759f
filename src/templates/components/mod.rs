use crate::view::Highlighted;
use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod filters;
pub mod no_results;

pub use card::{activity_card, association_card, card, document_card};
pub use error::error_page;
pub use filters::{filter_form, search_input, select_filter};
pub use no_results::no_results;

/// Text with its search marks wrapped in `<mark>`.
pub fn highlighted(text: &Highlighted) -> Markup {
    html! {
        @for segment in text.segments() {
            @if segment.marked {
                mark { (segment.text) }
            } @else {
                (segment.text)
            }
        }
    }
}

/// Shown in place of a section whose records could not be loaded.
pub fn load_error(message: &str) -> Markup {
    html! {
        div class="error-message" { (message) }
    }
}

/// Shown when the source answered with no records at all.
pub fn empty_notice(lines: &[&str]) -> Markup {
    html! {
        div class="empty-notice" {
            @for line in lines {
                p { (line) }
            }
        }
    }
}
