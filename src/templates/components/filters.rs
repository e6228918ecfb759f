use crate::debounce::SearchTrigger;
use maud::{html, Markup};

/// A `<select>` whose first option is the `todas` sentinel.
pub fn select_filter(
    name: &str,
    label: &str,
    any_label: &str,
    options: &[(String, String)],
    selected: Option<&str>,
) -> Markup {
    html! {
        div class="filter-group" {
            label for=(name) { (label) }
            select name=(name) id=(name) {
                option value="todas" selected[selected.is_none()] { (any_label) }
                @for (value, text) in options {
                    option value=(value) selected[selected == Some(value.as_str())] { (text) }
                }
            }
        }
    }
}

pub const SEARCH_INPUT_ID: &str = "pesquisa";

pub fn search_input(placeholder: &str, value: Option<&str>) -> Markup {
    html! {
        div class="filter-group search-group" {
            label for=(SEARCH_INPUT_ID) class="sr-only" { "Pesquisar" }
            input
                type="search"
                id=(SEARCH_INPUT_ID)
                name="pesquisa"
                placeholder=(placeholder)
                value=[value]
                autocomplete="off";
        }
    }
}

/// Filter form that re-renders `target` from `list_path` on every change,
/// with the search field scheduled by `trigger`.
pub fn filter_form(
    page_path: &str,
    list_path: &str,
    target: &str,
    trigger: SearchTrigger,
    fields: Markup,
) -> Markup {
    html! {
        form
            class="filters"
            method="get"
            action=(page_path)
            hx-get=(list_path)
            hx-target=(format!("#{target}"))
            hx-swap="innerHTML"
            hx-trigger=(trigger.hx_trigger(&format!("#{SEARCH_INPUT_ID}")))
            hx-sync=(trigger.hx_sync())
        {
            (fields)
            noscript { button type="submit" class="btn" { "Filtrar" } }
            a href=(page_path) class="btn btn-outline clear-filters" { "Limpar Filtros" }
        }
    }
}
