// templates/pages/home.rs

use crate::domain::dates::month_abbrev;
use crate::domain::{Activity, Association};
use crate::templates::components::{card, load_error};
use crate::templates::desktop_layout;
use chrono::Datelike;
use maud::{html, Markup};

pub const FEATURED: usize = 4;

/// Shown when the backend has no association yet.
const FALLBACK_ASSOCIATIONS: [(&str, &str); 4] = [
    (
        "Grupo Folclórico de Valongo",
        "Preservação e divulgação das tradições populares do concelho através da dança e música tradicional.",
    ),
    (
        "Clube Desportivo de Ermesinde",
        "Promoção do desporto e atividade física para todas as idades, com especial foco no futebol e basquetebol.",
    ),
    (
        "Universidade Sénior de Alfena",
        "Educação e formação para a população sénior, promovendo o envelhecimento ativo e a aprendizagem ao longo da vida.",
    ),
    (
        "Associação Cultural de Campo",
        "Dinamização cultural da freguesia através de teatro, música e eventos comunitários.",
    ),
];

pub fn home_page(associations: Markup, activities: Markup, calendar: Markup) -> Markup {
    desktop_layout(
        "Início",
        "/",
        html! {
            section class="hero" {
                h1 { "O movimento associativo de Valongo" }
                p { "Associações, atividades e documentos das cinco freguesias do concelho." }
                a href="/associacoes" class="btn btn-primary" { "Explorar Associações" }
            }

            section class="featured-associations" {
                h2 { "Associações em Destaque" }
                div id="associations-container" class="cards-grid" { (associations) }
            }

            section class="upcoming-activities" {
                h2 { "Próximas Atividades" }
                div id="activities-container" class="cards-grid" { (activities) }
                a href="/atividades?data=futuras" class="btn btn-outline" { "Ver todas" }
            }

            section class="calendar-section" {
                h2 { "Calendário" }
                (calendar)
            }
        },
    )
}

/// `None` when the source could not be reached.
pub fn featured_associations(associations: Option<&[Association]>) -> Markup {
    match associations {
        None => load_error("Erro ao carregar associações. Tente novamente mais tarde."),
        Some([]) => html! {
            @for (name, description) in FALLBACK_ASSOCIATIONS {
                article class="association-card" {
                    (card(name, html! { p class="association-description" { (description) } }))
                }
            }
        },
        Some(list) => html! {
            @for association in list.iter().take(FEATURED) {
                article class="association-card" {
                    (card(&association.name, html! {
                        p class="association-description" {
                            @if association.description.trim().is_empty() {
                                "Associação ativa no concelho de Valongo."
                            } @else {
                                (association.description)
                            }
                        }
                        a href=(format!("/associacoes/{}", association.id)) class="btn btn-outline btn-sm" { "Saber Mais" }
                    }))
                }
            }
        },
    }
}

/// `None` when the source could not be reached.
pub fn upcoming_activities(upcoming: Option<&[&Activity]>) -> Markup {
    match upcoming {
        None => load_error("Erro ao carregar atividades. Tente novamente mais tarde."),
        Some([]) => html! {
            p class="empty-notice" { "Não há atividades agendadas de momento." }
        },
        Some(list) => html! {
            @for activity in list.iter().take(FEATURED) {
                article class="activity-card" {
                    @if let Some(date) = activity.date {
                        div class="activity-date" {
                            span class="date-day" { (format!("{:02}", date.day())) }
                            span class="date-month" { (month_abbrev(date.month())) }
                        }
                    }
                    h3 class="activity-name" { (activity.name) }
                    p class="activity-description" { (activity.description) }
                    div class="activity-meta" {
                        span class="activity-location" { (activity.location) }
                        span class="activity-association" { (activity.association_display()) }
                    }
                }
            }
        },
    }
}
