//! The set of criteria the user currently has active.

use chrono::NaiveDate;

/// Named relative-date range, evaluated against "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    Today,
    ThisWeek,
    ThisMonth,
    NextMonth,
    Past,
    Future,
}

impl DateBucket {
    pub const ALL: [DateBucket; 6] = [
        DateBucket::Today,
        DateBucket::ThisWeek,
        DateBucket::ThisMonth,
        DateBucket::NextMonth,
        DateBucket::Past,
        DateBucket::Future,
    ];

    /// Parses the `data` query token. Unknown tokens are `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "hoje" => Some(DateBucket::Today),
            "semana" => Some(DateBucket::ThisWeek),
            "mes" => Some(DateBucket::ThisMonth),
            "proximo-mes" => Some(DateBucket::NextMonth),
            "passadas" => Some(DateBucket::Past),
            "futuras" => Some(DateBucket::Future),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            DateBucket::Today => "hoje",
            DateBucket::ThisWeek => "semana",
            DateBucket::ThisMonth => "mes",
            DateBucket::NextMonth => "proximo-mes",
            DateBucket::Past => "passadas",
            DateBucket::Future => "futuras",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateBucket::Today => "Hoje",
            DateBucket::ThisWeek => "Esta semana",
            DateBucket::ThisMonth => "Este mês",
            DateBucket::NextMonth => "Próximo mês",
            DateBucket::Past => "Passadas",
            DateBucket::Future => "Futuras",
        }
    }

    /// Inclusive day-offset ranges; `offset` is record date minus today.
    pub fn contains(self, offset: i64) -> bool {
        match self {
            DateBucket::Today => offset == 0,
            DateBucket::ThisWeek => (0..=7).contains(&offset),
            DateBucket::ThisMonth => (0..=30).contains(&offset),
            DateBucket::NextMonth => (30..=60).contains(&offset),
            DateBucket::Past => offset < 0,
            DateBucket::Future => offset >= 0,
        }
    }
}

/// Every criterion is optional; unset means no constraint.
///
/// Text criteria are stored trimmed and never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: Option<String>,
    pub region: Option<String>,
    pub date_bucket: Option<DateBucket>,
    pub search: Option<String>,
    pub day: Option<NaiveDate>,
    pub year: Option<i32>,
    pub association: Option<i64>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn set_category(&mut self, value: &str) {
        self.category = clean(value);
    }

    pub fn set_region(&mut self, value: &str) {
        self.region = clean(value);
    }

    pub fn set_search(&mut self, value: &str) {
        self.search = clean(value);
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }

    /// Search terms: whitespace-split, never empty strings.
    pub fn search_terms(&self) -> Vec<&str> {
        self.search
            .as_deref()
            .map(|q| q.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// Trimmed value, or `None` for blanks and the `todas` select sentinel.
fn clean(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() || v.eq_ignore_ascii_case("todas") {
        None
    } else {
        Some(v.to_string())
    }
}
