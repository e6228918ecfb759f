//! One predicate per criterion.

use super::{DateBucket, Predicate};
use crate::domain::dates::day_offset;
use crate::domain::text::fold_case;
use crate::domain::Listing;
use chrono::NaiveDate;

/// Category rule is delegated to the record kind.
#[derive(Debug, Clone)]
pub struct CategoryPredicate {
    value: String,
}

impl CategoryPredicate {
    pub fn new(value: &str) -> Self {
        Self {
            value: fold_case(value.trim()),
        }
    }
}

impl Predicate for CategoryPredicate {
    fn matches(&self, record: &dyn Listing) -> bool {
        record.matches_category(&self.value)
    }

    fn description(&self) -> String {
        format!("category({})", self.value)
    }
}

/// Substring of the location/address.
#[derive(Debug, Clone)]
pub struct RegionPredicate {
    value: String,
}

impl RegionPredicate {
    pub fn new(value: &str) -> Self {
        Self {
            value: fold_case(value.trim()),
        }
    }
}

impl Predicate for RegionPredicate {
    fn matches(&self, record: &dyn Listing) -> bool {
        fold_case(record.location()).contains(&self.value)
    }

    fn description(&self) -> String {
        format!("region({})", self.value)
    }
}

/// A record without a date never matches.
#[derive(Debug, Clone)]
pub struct DateBucketPredicate {
    bucket: DateBucket,
    today: NaiveDate,
}

impl DateBucketPredicate {
    pub fn new(bucket: DateBucket, today: NaiveDate) -> Self {
        Self { bucket, today }
    }
}

impl Predicate for DateBucketPredicate {
    fn matches(&self, record: &dyn Listing) -> bool {
        record
            .date()
            .map(|date| self.bucket.contains(day_offset(date, self.today)))
            .unwrap_or(false)
    }

    fn description(&self) -> String {
        format!("date({} from {})", self.bucket.token(), self.today)
    }
}

/// Every term must appear somewhere in the searchable text.
#[derive(Debug, Clone)]
pub struct SearchPredicate {
    terms: Vec<String>,
}

impl SearchPredicate {
    pub fn new(query: &str) -> Self {
        Self {
            terms: query.split_whitespace().map(fold_case).collect(),
        }
    }
}

impl Predicate for SearchPredicate {
    fn matches(&self, record: &dyn Listing) -> bool {
        let haystack = record.search_text();
        self.terms.iter().all(|term| haystack.contains(term.as_str()))
    }

    fn description(&self) -> String {
        format!("search({})", self.terms.join(" AND "))
    }
}

#[derive(Debug, Clone)]
pub struct DayPredicate {
    day: NaiveDate,
}

impl DayPredicate {
    pub fn new(day: NaiveDate) -> Self {
        Self { day }
    }
}

impl Predicate for DayPredicate {
    fn matches(&self, record: &dyn Listing) -> bool {
        record.date() == Some(self.day)
    }

    fn description(&self) -> String {
        format!("day({})", self.day)
    }
}

#[derive(Debug, Clone)]
pub struct YearPredicate {
    year: i32,
}

impl YearPredicate {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Predicate for YearPredicate {
    fn matches(&self, record: &dyn Listing) -> bool {
        record.year() == Some(self.year)
    }

    fn description(&self) -> String {
        format!("year({})", self.year)
    }
}

#[derive(Debug, Clone)]
pub struct AssociationPredicate {
    id: i64,
}

impl AssociationPredicate {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl Predicate for AssociationPredicate {
    fn matches(&self, record: &dyn Listing) -> bool {
        record.association_id() == Some(self.id)
    }

    fn description(&self) -> String {
        format!("association({})", self.id)
    }
}
