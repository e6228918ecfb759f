// templates/pages/association_detail.rs

use crate::domain::activity::next_after;
use crate::domain::dates::{format_long, format_optional};
use crate::domain::{Activity, Association};
use crate::templates::components::{empty_notice, load_error};
use crate::templates::desktop_layout;
use chrono::NaiveDate;
use maud::{html, Markup};

/// `activities` is `None` when they could not be loaded.
pub fn association_detail_page(
    association: &Association,
    activities: Option<&[Activity]>,
    today: NaiveDate,
) -> Markup {
    let count = activities.map(|a| a.len().to_string()).unwrap_or_else(|| "-".into());
    let next = match activities {
        Some(list) => next_after(list, today)
            .and_then(|a| a.date.map(|d| format!("{} ({})", a.name, format_long(d))))
            .unwrap_or_else(|| "Nenhuma".into()),
        None => "-".into(),
    };

    desktop_layout(
        &association.name,
        "/associacoes",
        html! {
            div class="association-detail-card" {
                div class="association-header" {
                    h1 class="association-title" { (association.name) }
                    span class="association-type-badge" { (association.type_label()) }
                }

                div class="association-info-grid" {
                    div class="association-main-info" {
                        h2 { "Sobre a Associação" }
                        p class="association-description" { (association.description_display()) }

                        @let labels = association.category_labels();
                        @if !labels.is_empty() {
                            ul class="association-categories" {
                                @for label in labels { li { (label) } }
                            }
                        }

                        div class="association-contact" {
                            h3 { "Contactos" }
                            @if !association.address.is_empty() {
                                div class="contact-item" { span { "📍 " (association.address) } }
                            }
                            @if let Some(phone) = &association.phone {
                                div class="contact-item" { span { "📞 " (phone) } }
                            }
                            @if let Some(email) = &association.email {
                                div class="contact-item" {
                                    span { "✉️ " a href=(format!("mailto:{email}")) { (email) } }
                                }
                            }
                            @if let Some(social) = &association.social_media {
                                div class="contact-item" { span { "🌐 " (social) } }
                            }
                        }
                    }

                    div class="association-sidebar" {
                        div class="quick-actions" {
                            h3 { "Ações Rápidas" }
                            a href=(format!("/atividades?associacao={}", association.id)) class="btn btn-primary btn-block" {
                                "Ver Todas as Atividades"
                            }
                            @if let Some(email) = &association.email {
                                a href=(format!("mailto:{email}")) class="btn btn-outline btn-block" { "Contactar" }
                            }
                        }
                        div class="association-stats" {
                            h3 { "Estatísticas" }
                            div class="stat-item" {
                                span class="stat-label" { "Atividades Ativas:" }
                                " "
                                span class="stat-value" id="activities-count" { (count) }
                            }
                            div class="stat-item" {
                                span class="stat-label" { "Próxima Atividade:" }
                                " "
                                span class="stat-value" id="next-activity" { (next) }
                            }
                        }
                    }
                }
            }

            section class="association-activities" {
                h2 { "Atividades" }
                div id="activities-content" {
                    @match activities {
                        None => { (load_error("Erro ao carregar atividades.")) },
                        Some([]) => { (empty_notice(&["Esta associação ainda não tem atividades registadas."])) },
                        Some(list) => {
                            div class="activities-grid" {
                                @for activity in list {
                                    div class="activity-card" {
                                        div class="activity-header" {
                                            h3 class="activity-name" { (activity.name) }
                                            span class="activity-date" { (format_optional(activity.date)) }
                                        }
                                        p class="activity-description" {
                                            @if activity.description.trim().is_empty() {
                                                "Descrição não disponível"
                                            } @else {
                                                (activity.description)
                                            }
                                        }
                                        @if !activity.location.is_empty() {
                                            p class="activity-location" { "📍 " (activity.location) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            p { a href="/associacoes" { "← Voltar às associações" } }
        },
    )
}

/// Detail page body when the association itself could not be loaded.
pub fn association_unavailable_page() -> Markup {
    desktop_layout(
        "Associação",
        "/associacoes",
        load_error("Erro ao carregar detalhes da associação."),
    )
}
