use crate::domain::region::FREGUESIAS;
use crate::filter::{FilterState, QueryBinding};
use maud::{html, Markup};

pub mod activities;
pub mod association_detail;
pub mod associations;
pub mod calendar;
pub mod documents;
pub mod home;

pub use activities::{activities_list, activities_page};
pub use association_detail::{association_detail_page, association_unavailable_page};
pub use associations::{associations_list, associations_page};
pub use calendar::{calendar_page, calendar_widget};
pub use documents::{documents_list, documents_page};
pub use home::{featured_associations, home_page, upcoming_activities};

fn region_options() -> Vec<(String, String)> {
    FREGUESIAS
        .iter()
        .map(|(slug, label)| (slug.to_string(), label.to_string()))
        .collect()
}

fn options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

/// Current location with only the search criterion dropped.
fn without_search(binding: QueryBinding, path: &str, state: &FilterState) -> String {
    let mut state = state.clone();
    state.clear_search();
    binding.location(path, &state)
}

/// Criteria with no visible control, carried along on every form submit.
fn hidden_criteria(state: &FilterState) -> Markup {
    html! {
        @if let Some(day) = state.day {
            input type="hidden" name="dia" value=(day.format("%Y-%m-%d").to_string());
        }
        @if let Some(id) = state.association {
            input type="hidden" name="associacao" value=(id);
        }
    }
}
