//! Two-way binding between [`FilterState`] and the query string.

use super::{DateBucket, FilterState};
use crate::domain::dates::parse_iso_date;
use std::collections::HashMap;
use url::form_urlencoded;
use url::Url;

pub const PARAM_REGION: &str = "freguesia";
pub const PARAM_ACTIVITY: &str = "atividade";
pub const PARAM_TYPE: &str = "tipo";
pub const PARAM_DATE: &str = "data";
pub const PARAM_SEARCH: &str = "pesquisa";
pub const PARAM_DAY: &str = "dia";
pub const PARAM_YEAR: &str = "ano";
pub const PARAM_ASSOCIATION: &str = "associacao";

const RECOGNISED: [&str; 8] = [
    PARAM_REGION,
    PARAM_ACTIVITY,
    PARAM_TYPE,
    PARAM_DATE,
    PARAM_SEARCH,
    PARAM_DAY,
    PARAM_YEAR,
    PARAM_ASSOCIATION,
];

fn is_recognised(name: &str) -> bool {
    RECOGNISED.contains(&name)
}

/// Per-page flavour of the binding: only the category parameter name differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryBinding {
    category_param: &'static str,
}

impl QueryBinding {
    pub const ACTIVITIES: QueryBinding = QueryBinding {
        category_param: PARAM_ACTIVITY,
    };

    /// Associations and documents.
    pub const TYPED: QueryBinding = QueryBinding {
        category_param: PARAM_TYPE,
    };

    /// Hydrates a state from a raw query string (no leading `?`).
    ///
    /// Unknown parameters are ignored and malformed values leave their
    /// criterion unset. When a name repeats, the first occurrence wins.
    pub fn parse(self, query: &str) -> FilterState {
        let mut params: HashMap<String, String> = HashMap::new();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            if is_recognised(&key) {
                params.entry(key.into_owned()).or_insert_with(|| value.into_owned());
            }
        }

        let get = |name: &str| params.get(name).map(String::as_str).unwrap_or("");
        let mut state = FilterState::new();

        state.set_region(get(PARAM_REGION));
        state.set_category(get(PARAM_ACTIVITY));
        if state.category.is_none() {
            state.set_category(get(PARAM_TYPE));
        }
        state.set_search(get(PARAM_SEARCH));
        state.date_bucket = DateBucket::from_token(get(PARAM_DATE));
        state.day = parse_iso_date(get(PARAM_DAY));
        state.year = get(PARAM_YEAR).trim().parse().ok();
        state.association = get(PARAM_ASSOCIATION).trim().parse().ok();

        state
    }

    /// Set criteria as (name, value) pairs, in a stable order.
    pub fn pairs(self, state: &FilterState) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(region) = &state.region {
            pairs.push((PARAM_REGION, region.clone()));
        }
        if let Some(category) = &state.category {
            pairs.push((self.category_param, category.clone()));
        }
        if let Some(bucket) = state.date_bucket {
            pairs.push((PARAM_DATE, bucket.token().to_string()));
        }
        if let Some(day) = state.day {
            pairs.push((PARAM_DAY, day.format("%Y-%m-%d").to_string()));
        }
        if let Some(year) = state.year {
            pairs.push((PARAM_YEAR, year.to_string()));
        }
        if let Some(id) = state.association {
            pairs.push((PARAM_ASSOCIATION, id.to_string()));
        }
        if let Some(search) = &state.search {
            pairs.push((PARAM_SEARCH, search.clone()));
        }
        pairs
    }

    /// Encoded query string without the leading `?`; empty when nothing is set.
    pub fn to_query_string(self, state: &FilterState) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.pairs(state) {
            ser.append_pair(name, &value);
        }
        ser.finish()
    }

    /// `path` plus the state's query, e.g. `/atividades?freguesia=alfena`.
    pub fn location(self, path: &str, state: &FilterState) -> String {
        let query = self.to_query_string(state);
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }

    /// Rewrites the recognised parameters of `url` to reflect `state`,
    /// keeping every other parameter in place.
    pub fn apply_to_url(self, url: &mut Url, state: &FilterState) {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| !is_recognised(k))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let set = self.pairs(state);

        if kept.is_empty() && set.is_empty() {
            url.set_query(None);
            return;
        }

        let mut qp = url.query_pairs_mut();
        qp.clear();
        for (k, v) in &kept {
            qp.append_pair(k, v);
        }
        for (k, v) in &set {
            qp.append_pair(k, v);
        }
    }
}
