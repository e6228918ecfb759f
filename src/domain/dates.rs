// src/domain/dates.rs

use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Accepts `YYYY-MM-DD`, optionally followed by a time part (`T...` or ` ...`).
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Whole days from `today` to `date`; negative for the past.
pub fn day_offset(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// "18/12/2024"
pub fn format_short(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// "18 de dezembro de 2024"
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name(date.month()).to_lowercase(),
        date.year()
    )
}

pub fn format_optional(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format_short(d),
        None => "Data não disponível".to_string(),
    }
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Three-letter upper-case month, as on the date badges ("DEZ").
pub fn month_abbrev(month: u32) -> String {
    month_name(month).chars().take(3).collect::<String>().to_uppercase()
}

/// "Hoje", "Amanhã", "Em 3 dias", "Ontem", "Há 5 dias".
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    match day_offset(date, today) {
        0 => "Hoje".to_string(),
        1 => "Amanhã".to_string(),
        -1 => "Ontem".to_string(),
        n if n > 1 => format!("Em {n} dias"),
        n => format!("Há {} dias", n.abs()),
    }
}
