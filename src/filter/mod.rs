//! Record filtering.
//!
//! A [`FilterState`] compiles into an [`AllOf`] of per-criterion predicates;
//! a record is visible only if it passes every one of them.

mod predicates;
pub mod query;
mod state;

pub use predicates::{
    AssociationPredicate, CategoryPredicate, DateBucketPredicate, DayPredicate, RegionPredicate,
    SearchPredicate, YearPredicate,
};
pub use query::QueryBinding;
pub use state::{DateBucket, FilterState};

use crate::domain::Listing;
use chrono::NaiveDate;

/// A single visibility rule.
pub trait Predicate {
    fn matches(&self, record: &dyn Listing) -> bool;

    /// Short human-readable form, used in logs.
    fn description(&self) -> String;
}

/// AND of its predicates. Empty matches everything.
#[derive(Default)]
pub struct AllOf {
    predicates: Vec<Box<dyn Predicate>>,
}

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Builds the predicate set for `state`, with date buckets relative to `today`.
    pub fn compile(state: &FilterState, today: NaiveDate) -> Self {
        let mut all = AllOf::new();

        if let Some(category) = &state.category {
            all = all.with(Box::new(CategoryPredicate::new(category)));
        }
        if let Some(region) = &state.region {
            all = all.with(Box::new(RegionPredicate::new(region)));
        }
        if let Some(bucket) = state.date_bucket {
            all = all.with(Box::new(DateBucketPredicate::new(bucket, today)));
        }
        if let Some(day) = state.day {
            all = all.with(Box::new(DayPredicate::new(day)));
        }
        if let Some(year) = state.year {
            all = all.with(Box::new(YearPredicate::new(year)));
        }
        if let Some(id) = state.association {
            all = all.with(Box::new(AssociationPredicate::new(id)));
        }
        if !state.search_terms().is_empty() {
            all = all.with(Box::new(SearchPredicate::new(
                state.search.as_deref().unwrap_or(""),
            )));
        }

        all
    }
}

impl Predicate for AllOf {
    fn matches(&self, record: &dyn Listing) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    fn description(&self) -> String {
        if self.predicates.is_empty() {
            "all".to_string()
        } else {
            let parts: Vec<String> = self.predicates.iter().map(|p| p.description()).collect();
            parts.join(" AND ")
        }
    }
}

impl std::fmt::Debug for AllOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllOf")
            .field("predicates", &self.description())
            .finish()
    }
}

/// Whether `record` is visible under `state`.
pub fn evaluate(record: &dyn Listing, state: &FilterState, today: NaiveDate) -> bool {
    AllOf::compile(state, today).matches(record)
}
