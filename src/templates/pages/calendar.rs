// templates/pages/calendar.rs

use crate::domain::calendar::{DayCell, MonthGrid, DAY_HEADERS};
use crate::templates::desktop_layout;
use chrono::Datelike;
use maud::{html, Markup};

/// Self-replacing widget: the month links swap it in place through htmx.
pub fn calendar_widget(grid: &MonthGrid) -> Markup {
    let prev = format!("/calendario?mes={}", grid.month.prev().to_param());
    let next = format!("/calendario?mes={}", grid.month.next().to_param());

    html! {
        div id="calendar" class="calendar" {
            div class="calendar-header" {
                a class="calendar-nav prev" href=(prev) hx-get=(prev) hx-target="#calendar" hx-swap="outerHTML" { "‹" }
                h3 class="calendar-title" { (grid.month.title()) }
                a class="calendar-nav next" href=(next) hx-get=(next) hx-target="#calendar" hx-swap="outerHTML" { "›" }
            }
            div class="calendar-grid" {
                @for header in DAY_HEADERS {
                    div class="calendar-day-header" { (header) }
                }
                @for cell in &grid.cells {
                    div class=(day_class(cell)) {
                        @if cell.events.is_empty() {
                            span class="day-number" { (cell.date.day()) }
                        } @else {
                            a class="day-number" href=(format!("/atividades?dia={}", cell.date.format("%Y-%m-%d"))) { (cell.date.day()) }
                            div class="day-events" {
                                @for event in &cell.events {
                                    span class=(format!("event-dot {}", event.kind.class())) title=(event.name) {}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn day_class(cell: &DayCell) -> String {
    let mut class = String::from("calendar-day");
    if !cell.in_month {
        class.push_str(" other-month");
    }
    if cell.is_today {
        class.push_str(" today");
    }
    if !cell.events.is_empty() {
        class.push_str(" has-events");
    }
    class
}

pub fn calendar_page(grid: &MonthGrid) -> Markup {
    desktop_layout(
        "Calendário",
        "/calendario",
        html! {
            section class="page-header" {
                h1 { "Calendário" }
                p { "Atividades do mês nas associações do concelho." }
            }
            (calendar_widget(grid))
        },
    )
}
