// src/tests/router_tests/home_tests.rs

use crate::router::handle;
use crate::tests::utils::{app, body_string, count, get, text, StaticSource};
use scraper::Html;

fn home(source: StaticSource) -> Html {
    let app = app(source);
    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_document(&body_string(resp))
}

#[test]
fn shows_featured_and_upcoming() {
    let html = home(StaticSource::fixtures());
    assert_eq!(count(&html, "#associations-container .association-card"), 3);
    // Only activities from today on.
    assert_eq!(count(&html, "#activities-container .activity-card"), 3);
    assert_eq!(text(&html, "#activities-container .activity-name"), "Torneio de Karaté");
    assert_eq!(text(&html, "#activities-container .date-month"), "DEZ");
    assert_eq!(count(&html, "#calendar .calendar-day"), 42);
}

#[test]
fn empty_backend_falls_back_to_showcase() {
    let html = home(StaticSource::empty());
    assert_eq!(count(&html, "#associations-container .association-card"), 4);
    assert_eq!(
        text(&html, "#associations-container h2"),
        "Grupo Folclórico de Valongo"
    );
    assert_eq!(
        text(&html, "#activities-container .empty-notice"),
        "Não há atividades agendadas de momento."
    );
}

#[test]
fn unreachable_backend_degrades_each_section() {
    let html = home(StaticSource::failing());
    assert_eq!(
        text(&html, "#associations-container .error-message"),
        "Erro ao carregar associações. Tente novamente mais tarde."
    );
    assert_eq!(
        text(&html, "#activities-container .error-message"),
        "Erro ao carregar atividades. Tente novamente mais tarde."
    );
    assert_eq!(count(&html, "#calendar .calendar-day"), 42);
}

#[test]
fn nav_marks_current_section() {
    let html = home(StaticSource::fixtures());
    assert_eq!(text(&html, "nav a.active"), "Início");
}
