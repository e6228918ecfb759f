use crate::view::{Noun, Placeholder};
use maud::{html, Markup};

/// The single "no results" block of a listing.
///
/// `clear_search_href` is where the "Limpar Pesquisa" button points: the
/// current location with only the search removed.
pub fn no_results(noun: Noun, placeholder: &Placeholder, clear_search_href: &str, clear_all_href: &str) -> Markup {
    html! {
        div class="no-results" {
            @match placeholder {
                Placeholder::Search { query } => {
                    h3 { (noun.none_found()) }
                    p { "Não foram " (noun.found(2)) " " (noun.plural) " para \"" strong { (query) } "\"." }
                    p { "Sugestões:" }
                    ul class="suggestions" {
                        li { "Verifique a ortografia" }
                        li { "Use termos mais gerais" }
                        li { "Tente pesquisar por tipo de " (noun.singular) }
                    }
                    a href=(clear_search_href) class="btn btn-outline" { "Limpar Pesquisa" }
                },
                Placeholder::Filters => {
                    h3 { (noun.none_found()) }
                    p { "Tente ajustar os filtros ou limpar a pesquisa." }
                    a href=(clear_all_href) class="btn btn-outline" { "Limpar Filtros" }
                }
            }
        }
    }
}
