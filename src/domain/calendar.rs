// src/domain/calendar.rs

use crate::domain::activity::Activity;
use crate::domain::dates::month_name;
use crate::domain::text::fold_case;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

pub const DAY_HEADERS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

const GRID_CELLS: i64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Music,
    Theater,
    Sport,
    Culture,
}

impl EventType {
    /// CSS class on the calendar chip.
    pub fn class(self) -> &'static str {
        match self {
            EventType::Music => "music",
            EventType::Theater => "theater",
            EventType::Sport => "sport",
            EventType::Culture => "culture",
        }
    }

    /// Keyword classification of an activity name and optional type.
    pub fn classify(name: &str, activity_type: Option<&str>) -> Self {
        let name = fold_case(name);
        let kind = activity_type.map(fold_case).unwrap_or_default();
        let any = |words: &[&str]| words.iter().any(|w| name.contains(w));

        if any(&["música", "concerto", "canto"]) || kind.contains("música") {
            EventType::Music
        } else if any(&["teatro", "peça"]) || kind.contains("teatro") {
            EventType::Theater
        } else if any(&["futebol", "karaté", "desporto"]) || kind.contains("desporto") {
            EventType::Sport
        } else {
            EventType::Culture
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub name: String,
    pub kind: EventType,
    pub activity_id: Option<i64>,
}

pub type EventMap = BTreeMap<NaiveDate, Vec<CalendarEvent>>;

/// Groups dated activities by day. Undated ones are skipped.
pub fn events_from_activities(activities: &[Activity]) -> EventMap {
    let mut events = EventMap::new();
    for activity in activities {
        let Some(date) = activity.date else {
            continue;
        };
        events.entry(date).or_default().push(CalendarEvent {
            name: activity.name.clone(),
            kind: EventType::classify(&activity.name, activity.activity_type.as_deref()),
            activity_id: Some(activity.id),
        });
    }
    events
}

/// Shown when the backend is unreachable or has no dated activity.
pub fn sample_events() -> EventMap {
    let samples = [
        ((2024, 12, 15), "Concerto de Natal", EventType::Music),
        ((2024, 12, 18), "Torneio de Karaté", EventType::Sport),
        ((2024, 12, 22), "Peça de Teatro", EventType::Theater),
        ((2024, 12, 28), "Baile de Fim de Ano", EventType::Culture),
        ((2025, 1, 5), "Aula de Dança", EventType::Culture),
        ((2025, 1, 12), "Jogo de Futebol", EventType::Sport),
        ((2025, 1, 19), "Concerto de Fado", EventType::Music),
        ((2025, 1, 26), "Workshop de Teatro", EventType::Theater),
    ];

    let mut events = EventMap::new();
    for ((y, m, d), name, kind) in samples {
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            events.entry(date).or_default().push(CalendarEvent {
                name: name.to_string(),
                kind,
                activity_id: None,
            });
        }
    }
    events
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// `YYYY-MM`; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (y, m) = raw.trim().split_once('-')?;
        if y.len() != 4 || !y.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: i32 = y.parse().ok()?;
        let month: u32 = m.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn to_param(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// "Dezembro 2024"
    pub fn title(self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

#[derive(Debug, Clone)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Six weeks starting on the Sunday on or before the first of the month.
    /// `None` when the grid would leave chrono's date range.
    pub fn build(month: YearMonth, today: NaiveDate, events: &EventMap) -> Option<Self> {
        let first = month.first_day()?;
        let lead = first.weekday().num_days_from_sunday() as i64;
        let start = first.checked_sub_signed(Duration::days(lead))?;

        let cells = (0..GRID_CELLS)
            .map(|i| {
                let date = start.checked_add_signed(Duration::days(i))?;
                Some(DayCell {
                    date,
                    in_month: date.month() == month.month && date.year() == month.year,
                    is_today: date == today,
                    events: events.get(&date).cloned().unwrap_or_default(),
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self { month, cells })
    }
}
