// src/tests/router_tests/calendar_tests.rs

use crate::router::handle;
use crate::tests::utils::{app, body_string, count, get, htmx_get, text, StaticSource};
use scraper::Html;

#[test]
fn month_grid_has_six_weeks() {
    let app = app(StaticSource::fixtures());
    let html = Html::parse_document(&body_string(
        handle(get("/calendario?mes=2024-12"), &app).unwrap(),
    ));
    assert_eq!(count(&html, ".calendar-day"), 42);
    assert_eq!(count(&html, ".calendar-day-header"), 7);
    assert_eq!(text(&html, ".calendar-title"), "Dezembro 2024");
    assert_eq!(count(&html, ".calendar-day.today"), 1);
    assert_eq!(count(&html, "a[href=\"/atividades?dia=2024-12-22\"]"), 1);
    assert_eq!(count(&html, ".event-dot.theater"), 1);
}

#[test]
fn malformed_month_falls_back_to_current() {
    let app = app(StaticSource::fixtures());
    let html = Html::parse_document(&body_string(
        handle(get("/calendario?mes=2024-13"), &app).unwrap(),
    ));
    assert_eq!(text(&html, ".calendar-title"), "Dezembro 2024");
}

#[test]
fn navigation_links_cross_year_boundary() {
    let app = app(StaticSource::fixtures());
    let html = Html::parse_document(&body_string(
        handle(get("/calendario?mes=2025-01"), &app).unwrap(),
    ));
    assert_eq!(count(&html, "a.prev[href=\"/calendario?mes=2024-12\"]"), 1);
    assert_eq!(count(&html, "a.next[href=\"/calendario?mes=2025-02\"]"), 1);
    // 2025-01-05 from the fixtures appears, 2024-12-28 of the samples does not.
    assert_eq!(count(&html, "a[href=\"/atividades?dia=2025-01-05\"]"), 1);
    assert_eq!(count(&html, "a[href=\"/atividades?dia=2024-12-28\"]"), 0);
}

#[test]
fn unreachable_source_shows_sample_events() {
    let app = app(StaticSource::failing());
    let resp = handle(get("/calendario?mes=2024-12"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let html = Html::parse_document(&body_string(resp));
    assert_eq!(count(&html, "a[href=\"/atividades?dia=2024-12-28\"]"), 1);
    // The December grid runs into January, reaching the 5 January sample.
    assert_eq!(count(&html, ".has-events"), 5);
}

#[test]
fn htmx_request_gets_only_the_widget() {
    let app = app(StaticSource::fixtures());
    let body = body_string(handle(htmx_get("/calendario?mes=2024-12"), &app).unwrap());
    assert!(body.starts_with("<div id=\"calendar\""));
    assert!(!body.contains("<!DOCTYPE"));
}

#[test]
fn month_beyond_the_date_range_falls_back_to_current() {
    let app = app(StaticSource::fixtures());
    for mes in ["262142-12", "262143-12", "-262144-01"] {
        let resp = handle(get(&format!("/calendario?mes={mes}")), &app).unwrap();
        assert_eq!(resp.status(), 200);
        let html = Html::parse_document(&body_string(resp));
        assert_eq!(text(&html, ".calendar-title"), "Dezembro 2024");
        assert_eq!(count(&html, ".calendar-day"), 42);
    }
}

#[test]
fn page_and_widget_responses_vary_on_htmx_header() {
    let app = app(StaticSource::fixtures());
    for resp in [
        handle(get("/calendario?mes=2024-12"), &app).unwrap(),
        handle(htmx_get("/calendario?mes=2024-12"), &app).unwrap(),
    ] {
        assert_eq!(
            resp.headers().get("Vary").and_then(|v| v.to_str().ok()),
            Some("HX-Request")
        );
    }
}
