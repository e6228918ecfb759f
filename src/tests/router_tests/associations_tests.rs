// src/tests/router_tests/associations_tests.rs

use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::source::models::ApiActivity;
use crate::domain::Activity;
use crate::tests::utils::{app, attr, body_string, count, get, text, StaticSource};
use scraper::Html;

fn page(path: &str) -> Html {
    let app = app(StaticSource::fixtures());
    let resp = handle(get(path), &app).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_document(&body_string(resp))
}

#[test]
fn lists_associations_with_category_summary() {
    let html = page("/associacoes");
    assert_eq!(count(&html, ".association-card"), 3);
    assert_eq!(text(&html, "#associations-count"), "Mostrando 3 associações");
    assert_eq!(text(&html, ".association-categories"), "Atividades: Música, Dança");
    assert_eq!(text(&html, ".association-region"), "Valongo");
}

#[test]
fn type_matches_exactly_and_tags_by_substring() {
    let html = page("/associacoes?tipo=desporto");
    assert_eq!(count(&html, ".association-card"), 1);
    assert_eq!(text(&html, ".association-title"), "Clube Desportivo de Ermesinde");

    let html = page("/associacoes?tipo=karat");
    assert_eq!(count(&html, ".association-card"), 1);

    let html = page("/associacoes?tipo=cultura");
    assert_eq!(count(&html, ".association-card"), 2);
}

#[test]
fn region_matches_address_not_description() {
    let html = page("/associacoes?freguesia=valongo");
    assert_eq!(count(&html, ".association-card"), 1);
    assert_eq!(text(&html, ".association-title"), "Grupo Folclórico de Valongo");
}

#[test]
fn search_summary_agrees_in_number() {
    let html = page("/associacoes?pesquisa=grupo");
    assert_eq!(count(&html, ".association-card"), 2);
    assert_eq!(
        text(&html, "#associations-count"),
        "2 associações encontradas para \"grupo\""
    );
    assert_eq!(count(&html, ".association-title mark"), 2);
}

#[test]
fn detail_shows_stats() {
    let html = page("/associacoes/3");
    assert_eq!(text(&html, "h1.association-title"), "Grupo de Teatro de Sobrado");
    assert_eq!(text(&html, ".association-type-badge"), "Cultura");
    assert_eq!(text(&html, "#activities-count"), "1");
    assert_eq!(
        text(&html, "#next-activity"),
        "Peça de Teatro (22 de dezembro de 2024)"
    );
    assert_eq!(
        attr(&html, ".quick-actions a", "href").as_deref(),
        Some("/atividades?associacao=3")
    );
}

#[test]
fn detail_without_future_activity() {
    let html = page("/associacoes/1");
    assert_eq!(text(&html, "#activities-count"), "1");
    assert_eq!(text(&html, "#next-activity"), "Nenhuma");
}

#[test]
fn detail_without_any_activity() {
    let mut source = StaticSource::fixtures();
    source.activities = Some(Vec::new());
    let app = app(source);
    let html = Html::parse_document(&body_string(handle(get("/associacoes/2"), &app).unwrap()));
    assert_eq!(text(&html, "#activities-count"), "0");
    assert_eq!(
        text(&html, "#activities-content"),
        "Esta associação ainda não tem atividades registadas."
    );
}

#[test]
fn detail_lists_undated_activity_gracefully() {
    let mut source = StaticSource::fixtures();
    source.activities = Some(vec![Activity::from_api(ApiActivity {
        id: Some(9),
        name: Some("Ensaio aberto".into()),
        date: Some("em breve".into()),
        association_id: Some(2),
        ..Default::default()
    })
    .unwrap()]);
    let app = app(source);
    let html = Html::parse_document(&body_string(handle(get("/associacoes/2"), &app).unwrap()));
    assert_eq!(text(&html, ".activity-date"), "Data não disponível");
    assert_eq!(text(&html, "#next-activity"), "Nenhuma");
}

#[test]
fn unknown_association_is_not_found() {
    let app = app(StaticSource::fixtures());
    let err = handle(get("/associacoes/99"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}

#[test]
fn malformed_id_is_bad_request() {
    let app = app(StaticSource::fixtures());
    let err = handle(get("/associacoes/abc"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(html_error_response(err).status(), 400);
}

#[test]
fn detail_source_failure_renders_fallback() {
    let app = app(StaticSource::failing());
    let resp = handle(get("/associacoes/1"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = Html::parse_document(&body_string(resp));
    assert_eq!(text(&html, ".error-message"), "Erro ao carregar detalhes da associação.");
}

#[test]
fn unknown_route_is_not_found() {
    let app = app(StaticSource::fixtures());
    assert!(matches!(handle(get("/contactos"), &app), Err(ServerError::NotFound)));
}
