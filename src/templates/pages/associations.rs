// templates/pages/associations.rs

use super::{hidden_criteria, options, region_options, without_search};
use crate::config::SearchConfig;
use crate::debounce::SearchTrigger;
use crate::domain::association::ASSOCIATION_TYPES;
use crate::domain::Association;
use crate::filter::{FilterState, QueryBinding};
use crate::templates::components::{association_card, filter_form, no_results, search_input, select_filter};
use crate::templates::desktop_layout;
use crate::view::ListingPanel;
use maud::{html, Markup};

pub const PAGE_PATH: &str = "/associacoes";
pub const LIST_PATH: &str = "/associacoes/lista";
const LIST_ID: &str = "associations-list";

pub fn associations_page(state: &FilterState, search: &SearchConfig, list: Markup) -> Markup {
    desktop_layout(
        "Associações",
        PAGE_PATH,
        html! {
            section class="page-header" {
                h1 { "Associações" }
                p { "Conheça as associações do concelho de Valongo." }
            }

            (filter_form(PAGE_PATH, LIST_PATH, LIST_ID, SearchTrigger::new(search), html! {
                (search_input("Pesquisar associações...", state.search.as_deref()))
                (select_filter("freguesia", "Freguesia", "Todas as freguesias", &region_options(), state.region.as_deref()))
                (select_filter("tipo", "Área", "Todas as áreas", &options(&ASSOCIATION_TYPES), state.category.as_deref()))
                (hidden_criteria(state))
            }))

            div id=(LIST_ID) class="listing" {
                (list)
            }
        },
    )
}

pub fn associations_list(panel: &ListingPanel<'_, Association>, state: &FilterState) -> Markup {
    html! {
        p id="associations-count" class="listing-count" { (panel.summary()) }
        div class="associations-grid" {
            @for item in panel.visible() {
                (association_card(item))
            }
        }
        @if let Some(placeholder) = panel.placeholder() {
            (no_results(
                panel.noun(),
                placeholder,
                &without_search(QueryBinding::TYPED, PAGE_PATH, state),
                PAGE_PATH,
            ))
        }
    }
}
