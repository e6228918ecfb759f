// src/tests/router_tests/activities_tests.rs

use crate::router::handle;
use crate::tests::utils::{app, attr, body_string, count, get, htmx_get, text, StaticSource};
use scraper::Html;

fn page(path: &str) -> Html {
    let app = app(StaticSource::fixtures());
    let resp = handle(get(path), &app).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_document(&body_string(resp))
}

#[test]
fn lists_every_activity_without_criteria() {
    let html = page("/atividades");
    assert_eq!(count(&html, ".activity-card"), 4);
    assert_eq!(text(&html, "#activities-count"), "Mostrando 4 atividades");
    assert_eq!(count(&html, ".no-results"), 0);
}

#[test]
fn hydrates_region_and_date_from_the_url() {
    let html = page("/atividades?freguesia=ermesinde&data=semana");
    assert_eq!(count(&html, ".activity-card"), 1);
    assert_eq!(text(&html, ".activity-title"), "Torneio de Karaté");
    assert_eq!(
        attr(&html, "select[name=freguesia] option[selected]", "value").as_deref(),
        Some("ermesinde")
    );
    assert_eq!(
        attr(&html, "select[name=data] option[selected]", "value").as_deref(),
        Some("semana")
    );
    assert_eq!(
        attr(&html, "select[name=atividade] option[selected]", "value").as_deref(),
        Some("todas")
    );
}

#[test]
fn today_bucket_uses_injected_date() {
    let html = page("/atividades?data=hoje");
    assert_eq!(count(&html, ".activity-card"), 1);
    assert_eq!(text(&html, ".activity-when"), "Hoje");
}

#[test]
fn category_inferred_from_description() {
    let html = page("/atividades?atividade=desporto");
    assert_eq!(count(&html, ".activity-card"), 1);
    assert_eq!(text(&html, ".activity-title"), "Torneio de Karaté");
}

#[test]
fn search_highlights_matching_terms() {
    let html = page("/atividades?pesquisa=teatro");
    assert_eq!(count(&html, ".activity-card"), 1);
    assert_eq!(text(&html, ".activity-title mark"), "Teatro");
    assert_eq!(text(&html, "#activities-count"), "1 atividade encontrada para \"teatro\"");
    assert_eq!(attr(&html, "#pesquisa", "value").as_deref(), Some("teatro"));
}

#[test]
fn search_is_and_over_terms() {
    let html = page("/atividades?pesquisa=teatro+valongo");
    assert_eq!(count(&html, ".activity-card"), 0);
    assert_eq!(count(&html, ".no-results"), 1);
}

#[test]
fn short_search_is_ignored() {
    let html = page("/atividades?pesquisa=a");
    assert_eq!(count(&html, ".activity-card"), 4);
    assert_eq!(count(&html, "mark"), 0);
}

#[test]
fn empty_search_shows_a_single_placeholder() {
    let html = page("/atividades?freguesia=valongo&pesquisa=inexistente");
    assert_eq!(count(&html, ".no-results"), 1);
    assert_eq!(text(&html, ".no-results h3"), "Nenhuma atividade encontrada");
    // Clearing the search keeps the other criteria.
    assert_eq!(
        attr(&html, ".no-results a", "href").as_deref(),
        Some("/atividades?freguesia=valongo")
    );
}

#[test]
fn empty_filters_placeholder_clears_everything() {
    let html = page("/atividades?freguesia=campo");
    assert_eq!(count(&html, ".no-results"), 1);
    assert_eq!(text(&html, ".no-results a"), "Limpar Filtros");
    assert_eq!(attr(&html, ".no-results a", "href").as_deref(), Some("/atividades"));
}

#[test]
fn fragment_pushes_canonical_url() {
    let app = app(StaticSource::fixtures());
    let resp = handle(
        htmx_get("/atividades/lista?data=semana&utm_source=x&freguesia=ermesinde&pesquisa="),
        &app,
    )
    .unwrap();
    assert_eq!(
        resp.headers().get("HX-Push-Url").and_then(|v| v.to_str().ok()),
        Some("/atividades?freguesia=ermesinde&data=semana")
    );

    let body = body_string(resp);
    assert!(!body.contains("<!DOCTYPE"));
    let html = Html::parse_fragment(&body);
    assert_eq!(count(&html, ".activity-card"), 1);
}

#[test]
fn identical_requests_render_identically() {
    let app = app(StaticSource::fixtures());
    let path = "/atividades/lista?pesquisa=nada+disto";
    let first = body_string(handle(get(path), &app).unwrap());
    let second = body_string(handle(get(path), &app).unwrap());
    assert_eq!(first, second);
    assert_eq!(count(&Html::parse_fragment(&first), ".no-results"), 1);
}

#[test]
fn calendar_day_link_filters_by_day() {
    let html = page("/atividades?dia=2024-12-22");
    assert_eq!(count(&html, ".activity-card"), 1);
    assert_eq!(attr(&html, "input[name=dia]", "value").as_deref(), Some("2024-12-22"));
    assert_eq!(text(&html, ".active-day"), "Atividades de 22 de dezembro de 2024");
}

#[test]
fn association_filter_from_detail_link() {
    let html = page("/atividades?associacao=3");
    assert_eq!(count(&html, ".activity-card"), 1);
    assert_eq!(text(&html, ".activity-title"), "Peça de Teatro");
}

#[test]
fn source_failure_renders_fallback() {
    let app = app(StaticSource::failing());
    let resp = handle(get("/atividades"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = Html::parse_document(&body_string(resp));
    assert_eq!(
        text(&html, ".error-message"),
        "Erro ao carregar atividades. Tente novamente mais tarde."
    );
    assert_eq!(count(&html, ".activity-card"), 0);
}

#[test]
fn empty_source_renders_notice() {
    let app = app(StaticSource::empty());
    let html = Html::parse_document(&body_string(handle(get("/atividades"), &app).unwrap()));
    assert!(text(&html, ".empty-notice").starts_with("Ainda não há atividades registadas."));
    assert_eq!(count(&html, ".no-results"), 0);
}

#[test]
fn pushed_url_keeps_foreign_params_of_current_page() {
    let app = app(StaticSource::fixtures());
    let req = http::Request::builder()
        .method(http::Method::GET)
        .uri("/atividades/lista?freguesia=todas&data=semana&pesquisa=")
        .header("HX-Request", "true")
        .header("HX-Current-URL", "http://localhost:3000/atividades?lang=pt&data=hoje&freguesia=alfena")
        .body(astra::Body::empty())
        .unwrap();
    let resp = handle(req, &app).unwrap();
    assert_eq!(
        resp.headers().get("HX-Push-Url").and_then(|v| v.to_str().ok()),
        Some("/atividades?lang=pt&data=semana")
    );
}

#[test]
fn search_box_waits_for_quiet_period_and_keeps_one_request() {
    let html = page("/atividades");
    let trigger = attr(&html, "form.filters", "hx-trigger").unwrap_or_default();
    assert!(trigger.contains("length >= 2] changed delay:300ms from:#pesquisa"));
    assert!(trigger.contains("length < 2] changed from:#pesquisa"));
    assert_eq!(
        attr(&html, "form.filters", "hx-sync").as_deref(),
        Some("this:replace")
    );
}
