// src/tests/router_tests/documents_tests.rs

use crate::router::handle;
use crate::tests::utils::{app, body_string, count, get, htmx_get, text, StaticSource};
use scraper::Html;

fn page(path: &str) -> Html {
    let app = app(StaticSource::failing());
    let resp = handle(get(path), &app).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_document(&body_string(resp))
}

#[test]
fn catalogue_renders_without_the_backend() {
    let html = page("/documentos");
    assert_eq!(count(&html, ".document-card"), 7);
    assert_eq!(count(&html, ".documents-section"), 3);
    assert_eq!(text(&html, "#documents-count"), "Mostrando 7 documentos");
}

#[test]
fn kind_and_year_hide_empty_sections() {
    let html = page("/documentos?tipo=oficial&ano=2023");
    assert_eq!(count(&html, ".document-card"), 1);
    assert_eq!(count(&html, ".section-oficial"), 1);
    assert_eq!(count(&html, ".section-revista"), 0);
    assert_eq!(count(&html, ".section-reportagem"), 0);
    assert_eq!(text(&html, ".document-title"), "Relatório Anual do Associativismo");
}

#[test]
fn search_summary_uses_masculine_agreement() {
    let html = page("/documentos?pesquisa=teatro");
    assert_eq!(count(&html, ".document-card"), 1);
    assert_eq!(text(&html, "#documents-count"), "1 documento encontrado para \"teatro\"");
    assert_eq!(count(&html, ".document-title mark"), 1);
}

#[test]
fn no_match_has_one_placeholder() {
    let app = app(StaticSource::failing());
    let resp = handle(htmx_get("/documentos/lista?ano=1999"), &app).unwrap();
    assert_eq!(
        resp.headers().get("HX-Push-Url").and_then(|v| v.to_str().ok()),
        Some("/documentos?ano=1999")
    );
    let html = Html::parse_fragment(&body_string(resp));
    assert_eq!(count(&html, ".no-results"), 1);
    assert_eq!(count(&html, ".documents-section"), 0);
    assert_eq!(text(&html, ".no-results h3"), "Nenhum documento encontrado");
}
