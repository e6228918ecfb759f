// src/view/panel.rs

use super::highlight::Highlighted;
use super::summary::{count_summary, Noun};
use crate::domain::Listing;
use crate::filter::{AllOf, FilterState, Predicate};
use chrono::NaiveDate;

/// Presentation state of one record in a listing.
#[derive(Debug, Clone)]
pub struct PanelItem<'a, R> {
    pub record: &'a R,
    pub visible: bool,
    pub title: Highlighted,
    pub description: Highlighted,
}

/// Why a listing is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Filters,
    Search { query: String },
}

/// The listing container: every record with its visibility and highlights,
/// the count line and at most one "no results" placeholder.
#[derive(Debug, Clone)]
pub struct ListingPanel<'a, R> {
    noun: Noun,
    items: Vec<PanelItem<'a, R>>,
    placeholder: Option<Placeholder>,
    summary: String,
    visible_count: usize,
}

impl<'a, R: Listing> ListingPanel<'a, R> {
    /// Everything visible, nothing highlighted.
    pub fn new(noun: Noun, records: &'a [R]) -> Self {
        let items = records
            .iter()
            .map(|record| PanelItem {
                record,
                visible: true,
                title: Highlighted::new(record.title()),
                description: Highlighted::new(record.description()),
            })
            .collect::<Vec<_>>();
        let visible_count = items.len();
        Self {
            noun,
            items,
            placeholder: None,
            summary: count_summary(noun, visible_count, None),
            visible_count,
        }
    }

    /// Re-evaluates every record against `state`. Running it twice with the
    /// same arguments leaves the panel unchanged.
    pub fn synchronize(&mut self, state: &FilterState, today: NaiveDate) {
        let predicate = AllOf::compile(state, today);
        let terms = state.search_terms();
        tracing::debug!(filter = %predicate.description(), records = self.items.len(), "synchronizing listing");

        let mut visible_count = 0;
        for item in &mut self.items {
            item.visible = predicate.matches(item.record);
            if item.visible {
                visible_count += 1;
            }
            if item.visible && !terms.is_empty() {
                item.title.apply(&terms);
                item.description.apply(&terms);
            } else {
                item.title.clear();
                item.description.clear();
            }
        }

        self.visible_count = visible_count;
        self.summary = count_summary(self.noun, visible_count, state.search.as_deref());
        self.placeholder = if visible_count > 0 {
            None
        } else {
            Some(match &state.search {
                Some(query) => Placeholder::Search {
                    query: query.clone(),
                },
                None => Placeholder::Filters,
            })
        };
    }

    pub fn noun(&self) -> Noun {
        self.noun
    }

    pub fn items(&self) -> &[PanelItem<'a, R>] {
        &self.items
    }

    pub fn visible(&self) -> impl Iterator<Item = &PanelItem<'a, R>> {
        self.items.iter().filter(|item| item.visible)
    }

    /// Visible items that also satisfy `section`; used for grouped listings
    /// where an empty group is not rendered.
    pub fn visible_where<F>(&self, section: F) -> Vec<&PanelItem<'a, R>>
    where
        F: Fn(&R) -> bool,
    {
        self.visible().filter(|item| section(item.record)).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }
}
