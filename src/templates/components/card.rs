use super::highlighted;
use crate::domain::dates::{format_optional, relative_label};
use crate::domain::region::region_label;
use crate::domain::{Activity, Association, Document};
use crate::view::PanelItem;
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn activity_card(item: &PanelItem<'_, Activity>, today: NaiveDate) -> Markup {
    let activity = item.record;
    html! {
        article class="activity-card" data-id=(activity.id) {
            div class="activity-header" {
                h3 class="activity-title" { (highlighted(&item.title)) }
                span class="activity-date" { (format_optional(activity.date)) }
                @if let Some(date) = activity.date {
                    span class="activity-when" { (relative_label(date, today)) }
                }
            }
            div class="activity-content" {
                p class="activity-description" { (highlighted(&item.description)) }
                div class="activity-details" {
                    @if !activity.location.is_empty() {
                        p class="activity-location" { "📍 " (activity.location) }
                    }
                    p class="activity-association" {
                        @match activity.association_id {
                            Some(id) => a href=(format!("/associacoes/{id}")) { (activity.association_display()) },
                            None => { (activity.association_display()) }
                        }
                    }
                }
            }
        }
    }
}

pub fn association_card(item: &PanelItem<'_, Association>) -> Markup {
    let association = item.record;
    html! {
        article class="association-card" data-id=(association.id) {
            div class="association-header" {
                h3 class="association-title" { (highlighted(&item.title)) }
                span class="association-type-badge" { (association.type_label()) }
            }
            div class="association-content" {
                p class="association-description" {
                    @if association.description.trim().is_empty() {
                        (association.description_display())
                    } @else {
                        (highlighted(&item.description))
                    }
                }
                @if let Some(categories) = association.categories_summary() {
                    p class="association-categories" { strong { "Atividades:" } " " (categories) }
                }
                div class="association-details" {
                    @if !association.address.is_empty() {
                        p class="association-address" {
                            "📍 " (association.address)
                            @if let Some(label) = association.region().and_then(region_label) {
                                " · " span class="association-region" { (label) }
                            }
                        }
                    }
                    @if let Some(phone) = &association.phone {
                        p class="association-phone" { "📞 " (phone) }
                    }
                    @if let Some(email) = &association.email {
                        p class="association-email" { "✉️ " a href=(format!("mailto:{email}")) { (email) } }
                    }
                }
            }
            div class="association-footer" {
                a href=(format!("/associacoes/{}", association.id)) class="btn btn-primary btn-sm" { "Ver Detalhes" }
            }
        }
    }
}

pub fn document_card(item: &PanelItem<'_, Document>) -> Markup {
    let doc = item.record;
    html! {
        article class="document-card" data-id=(doc.id) data-tipo=(doc.kind.slug()) data-ano=(doc.year) {
            span class="document-kind" { (doc.kind.label()) }
            h3 class="document-title" { (highlighted(&item.title)) }
            p class="document-description" { (highlighted(&item.description)) }
            p class="document-meta" { (doc.meta) }
            a href=(format!("/static/documentos/{}", doc.file)) class="btn btn-outline btn-sm" download { "Descarregar" }
        }
    }
}
