// templates/pages/activities.rs

use super::{hidden_criteria, options, region_options, without_search};
use crate::config::SearchConfig;
use crate::debounce::SearchTrigger;
use crate::domain::dates::format_long;
use crate::domain::Activity;
use crate::filter::{DateBucket, FilterState, QueryBinding};
use crate::templates::components::{activity_card, filter_form, no_results, search_input, select_filter};
use crate::templates::desktop_layout;
use crate::view::ListingPanel;
use chrono::NaiveDate;
use maud::{html, Markup};

pub const PAGE_PATH: &str = "/atividades";
pub const LIST_PATH: &str = "/atividades/lista";
const LIST_ID: &str = "activities-list";

const ACTIVITY_KINDS: [(&str, &str); 5] = [
    ("música", "Música"),
    ("teatro", "Teatro"),
    ("desporto", "Desporto"),
    ("dança", "Dança"),
    ("cultura", "Cultura"),
];

/// `list` is the already rendered listing (or its fallback message).
pub fn activities_page(state: &FilterState, search: &SearchConfig, list: Markup) -> Markup {
    let buckets: Vec<(String, String)> = DateBucket::ALL
        .iter()
        .map(|b| (b.token().to_string(), b.label().to_string()))
        .collect();

    desktop_layout(
        "Atividades",
        PAGE_PATH,
        html! {
            section class="page-header" {
                h1 { "Atividades" }
                p { "Descubra as atividades promovidas pelas associações do concelho." }
                @if let Some(day) = state.day {
                    p class="active-day" { "Atividades de " (format_long(day)) }
                }
            }

            (filter_form(PAGE_PATH, LIST_PATH, LIST_ID, SearchTrigger::new(search), html! {
                (search_input("Pesquisar atividades...", state.search.as_deref()))
                (select_filter("freguesia", "Freguesia", "Todas as freguesias", &region_options(), state.region.as_deref()))
                (select_filter("atividade", "Tipo", "Todos os tipos", &options(&ACTIVITY_KINDS), state.category.as_deref()))
                (select_filter("data", "Data", "Todas as datas", &buckets, state.date_bucket.map(DateBucket::token)))
                (hidden_criteria(state))
            }))

            div id=(LIST_ID) class="listing" {
                (list)
            }
        },
    )
}

pub fn activities_list(panel: &ListingPanel<'_, Activity>, state: &FilterState, today: NaiveDate) -> Markup {
    html! {
        p id="activities-count" class="listing-count" { (panel.summary()) }
        div class="activities-grid" {
            @for item in panel.visible() {
                (activity_card(item, today))
            }
        }
        @if let Some(placeholder) = panel.placeholder() {
            (no_results(
                panel.noun(),
                placeholder,
                &without_search(QueryBinding::ACTIVITIES, PAGE_PATH, state),
                PAGE_PATH,
            ))
        }
    }
}
