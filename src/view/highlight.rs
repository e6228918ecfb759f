// src/view/highlight.rs

use crate::domain::text::fold_char;
use std::ops::Range;

/// Text that can carry search marks without ever losing its original form.
///
/// Marks are byte ranges into `original` and are always recomputed from it,
/// so re-highlighting replaces previous marks instead of nesting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    original: String,
    marks: Vec<Range<usize>>,
}

/// A run of text, marked or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub marked: bool,
}

impl Highlighted {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            original: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_marked(&self) -> bool {
        !self.marks.is_empty()
    }

    pub fn apply(&mut self, terms: &[&str]) {
        self.marks = find_marks(&self.original, terms);
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut out = Vec::with_capacity(self.marks.len() * 2 + 1);
        let mut cursor = 0;
        for mark in &self.marks {
            if mark.start > cursor {
                out.push(Segment {
                    text: &self.original[cursor..mark.start],
                    marked: false,
                });
            }
            out.push(Segment {
                text: &self.original[mark.clone()],
                marked: true,
            });
            cursor = mark.end;
        }
        if cursor < self.original.len() || out.is_empty() {
            out.push(Segment {
                text: &self.original[cursor..],
                marked: false,
            });
        }
        out
    }

    /// What the user currently sees, with marks dropped.
    pub fn plain(&self) -> String {
        self.segments().iter().map(|s| s.text).collect()
    }
}

/// Case-insensitive, non-overlapping occurrences of every term, merged and
/// sorted. Ranges always fall on char boundaries.
pub fn find_marks(text: &str, terms: &[&str]) -> Vec<Range<usize>> {
    let chars: Vec<(usize, char)> = text.char_indices().map(|(i, c)| (i, fold_char(c))).collect();
    let byte_at = |idx: usize| chars.get(idx).map(|(b, _)| *b).unwrap_or(text.len());

    let mut found: Vec<Range<usize>> = Vec::new();
    for term in terms {
        let needle: Vec<char> = term.chars().map(fold_char).collect();
        if needle.is_empty() || needle.len() > chars.len() {
            continue;
        }

        let mut start = 0;
        while start + needle.len() <= chars.len() {
            let hit = chars[start..start + needle.len()]
                .iter()
                .map(|(_, c)| *c)
                .eq(needle.iter().copied());
            if hit {
                found.push(byte_at(start)..byte_at(start + needle.len()));
                start += needle.len();
            } else {
                start += 1;
            }
        }
    }

    found.sort_by_key(|r| r.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(found.len());
    for range in found {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}
