// src/debounce.rs

use crate::config::SearchConfig;

/// Trimmed query if it is long enough to search for.
pub fn settled_query<'a>(raw: &'a str, config: &SearchConfig) -> Option<&'a str> {
    let trimmed = raw.trim();
    if trimmed.chars().count() >= config.min_query_len {
        Some(trimmed)
    } else {
        None
    }
}

/// How a search input schedules re-evaluation in the browser.
///
/// A settled query waits out the quiet period and every new keystroke
/// restarts that wait. A query below the minimum length clears the search
/// at once. Requests from one form replace each other, so only one is ever
/// in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTrigger {
    quiet_ms: u128,
    min_len: usize,
}

impl SearchTrigger {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            quiet_ms: config.quiet_period.as_millis(),
            min_len: config.min_query_len,
        }
    }

    /// `hx-trigger` for a form whose search field matches `input`.
    pub fn hx_trigger(&self, input: &str) -> String {
        let (quiet, min) = (self.quiet_ms, self.min_len);
        format!(
            "change, \
             input[target.value.trim().length >= {min}] changed delay:{quiet}ms from:{input}, \
             input[target.value.trim().length < {min}] changed from:{input}"
        )
    }

    /// `hx-sync` value: a newer request aborts the pending one.
    pub fn hx_sync(&self) -> &'static str {
        "this:replace"
    }
}
