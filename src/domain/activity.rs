// src/domain/activity.rs

use crate::domain::dates::parse_iso_date;
use crate::domain::listing::Listing;
use crate::domain::text::{contains_folded, fold_case};
use crate::source::models::ApiActivity;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// An activity as published by an association, validated from the wire model.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// `None` when the backend sent nothing or something unparseable.
    pub date: Option<NaiveDate>,
    pub location: String,
    pub association_id: Option<i64>,
    pub association_name: Option<String>,
    pub activity_type: Option<String>,
}

impl Activity {
    /// Validates that the fields required for display exist.
    pub fn from_api(raw: ApiActivity) -> Result<Self, String> {
        let id = raw.id.ok_or("Missing activity id")?;
        let name = raw
            .name
            .filter(|s| !s.trim().is_empty())
            .ok_or("Missing or empty activity name")?;

        let date = match raw.date.as_deref() {
            Some(s) if !s.trim().is_empty() => {
                let parsed = parse_iso_date(s);
                if parsed.is_none() {
                    tracing::debug!(id, date = s, "unparseable activity date, treating as absent");
                }
                parsed
            }
            _ => None,
        };

        Ok(Activity {
            id,
            name,
            description: raw.description.unwrap_or_default(),
            date,
            location: raw.location.unwrap_or_default(),
            association_id: raw.association_id,
            association_name: raw.association_name.filter(|s| !s.trim().is_empty()),
            activity_type: raw.activity_type.filter(|s| !s.trim().is_empty()),
        })
    }

    /// Converts a whole payload, dropping (and logging) invalid entries.
    pub fn from_api_list(raw: Vec<ApiActivity>) -> Vec<Self> {
        raw.into_iter()
            .filter_map(|a| match Activity::from_api(a) {
                Ok(activity) => Some(activity),
                Err(reason) => {
                    tracing::warn!(%reason, "dropping activity");
                    None
                }
            })
            .collect()
    }

    pub fn association_display(&self) -> &str {
        self.association_name
            .as_deref()
            .unwrap_or("Associação não especificada")
    }
}

/// Newest first; undated activities go last.
pub fn sort_newest_first(activities: &mut [Activity]) {
    activities.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Dated activities from `today` on, soonest first.
pub fn upcoming(activities: &[Activity], today: NaiveDate) -> Vec<&Activity> {
    let mut list: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.date.map(|d| d >= today).unwrap_or(false))
        .collect();
    list.sort_by_key(|a| a.date);
    list
}

/// The earliest activity strictly after `today`.
pub fn next_after(activities: &[Activity], today: NaiveDate) -> Option<&Activity> {
    activities
        .iter()
        .filter(|a| a.date.map(|d| d > today).unwrap_or(false))
        .min_by_key(|a| a.date)
}

impl Listing for Activity {
    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn association_id(&self) -> Option<i64> {
        self.association_id
    }

    fn association_name(&self) -> Option<&str> {
        self.association_name.as_deref()
    }

    fn category_label(&self) -> String {
        self.activity_type.clone().unwrap_or_default()
    }

    /// Exact match on the structured type, else inferred from the free text.
    fn matches_category(&self, value: &str) -> bool {
        if let Some(kind) = &self.activity_type {
            if fold_case(kind.trim()) == value {
                return true;
            }
        }
        contains_folded(&format!("{} {}", self.name, self.description), value)
    }
}
