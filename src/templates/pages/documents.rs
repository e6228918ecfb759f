// templates/pages/documents.rs

use super::without_search;
use crate::config::SearchConfig;
use crate::debounce::SearchTrigger;
use crate::domain::document::catalog_years;
use crate::domain::{Document, DocumentKind};
use crate::filter::{FilterState, QueryBinding};
use crate::templates::components::{document_card, filter_form, no_results, search_input, select_filter};
use crate::templates::desktop_layout;
use crate::view::ListingPanel;
use maud::{html, Markup};

pub const PAGE_PATH: &str = "/documentos";
pub const LIST_PATH: &str = "/documentos/lista";
const LIST_ID: &str = "documents-list";

pub fn documents_page(state: &FilterState, search: &SearchConfig, list: Markup) -> Markup {
    let kinds: Vec<(String, String)> = DocumentKind::ALL
        .iter()
        .map(|k| (k.slug().to_string(), k.label().to_string()))
        .collect();
    let years: Vec<(String, String)> = catalog_years()
        .into_iter()
        .map(|y| (y.to_string(), y.to_string()))
        .collect();
    let year = state.year.map(|y| y.to_string());

    desktop_layout(
        "Documentos",
        PAGE_PATH,
        html! {
            section class="page-header" {
                h1 { "Documentos" }
                p { "Revistas, documentos oficiais e reportagens sobre o associativismo." }
            }

            (filter_form(PAGE_PATH, LIST_PATH, LIST_ID, SearchTrigger::new(search), html! {
                (search_input("Pesquisar documentos...", state.search.as_deref()))
                (select_filter("tipo", "Tipo", "Todos os tipos", &kinds, state.category.as_deref()))
                (select_filter("ano", "Ano", "Todos os anos", &years, year.as_deref()))
            }))

            div id=(LIST_ID) class="listing" {
                (list)
            }
        },
    )
}

/// One section per document kind; a kind with nothing visible is left out.
pub fn documents_list(panel: &ListingPanel<'_, Document>, state: &FilterState) -> Markup {
    html! {
        p id="documents-count" class="listing-count" { (panel.summary()) }
        @for kind in DocumentKind::ALL {
            @let items = panel.visible_where(|doc| doc.kind == kind);
            @if !items.is_empty() {
                section class=(format!("documents-section section-{}", kind.slug())) {
                    h2 { (kind.section_title()) }
                    div class="documents-grid" {
                        @for item in items {
                            (document_card(item))
                        }
                    }
                }
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
