// src/tests/utils.rs

use crate::config::SearchConfig;
use crate::domain::{Activity, Association};
use crate::router::App;
use crate::source::models::{ApiActivity, ApiAssociation};
use crate::source::{RecordSource, SourceError};
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use http::Method;
use scraper::{Html, Selector};
use std::io::Read;

/// In-memory record source. `None` lists simulate an unreachable backend.
pub struct StaticSource {
    pub activities: Option<Vec<Activity>>,
    pub associations: Option<Vec<Association>>,
}

impl StaticSource {
    pub fn fixtures() -> Self {
        Self {
            activities: Some(activities()),
            associations: Some(associations()),
        }
    }

    pub fn failing() -> Self {
        Self {
            activities: None,
            associations: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            activities: Some(Vec::new()),
            associations: Some(Vec::new()),
        }
    }
}

fn unreachable() -> SourceError {
    SourceError::Network("connection refused".into())
}

impl RecordSource for StaticSource {
    fn activities(&self) -> Result<Vec<Activity>, SourceError> {
        self.activities.clone().ok_or_else(unreachable)
    }

    fn associations(&self) -> Result<Vec<Association>, SourceError> {
        self.associations.clone().ok_or_else(unreachable)
    }

    fn association(&self, id: i64) -> Result<Association, SourceError> {
        self.associations
            .as_ref()
            .ok_or_else(unreachable)?
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("/api/associations/{id}")))
    }

    fn association_activities(&self, id: i64) -> Result<Vec<Activity>, SourceError> {
        Ok(self
            .activities
            .as_ref()
            .ok_or_else(unreachable)?
            .iter()
            .filter(|a| a.association_id == Some(id))
            .cloned()
            .collect())
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 18).unwrap()
}

pub fn app(source: StaticSource) -> App {
    App {
        source: Box::new(source),
        search: SearchConfig::default(),
        today,
    }
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn htmx_get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

pub fn count(html: &Html, selector: &str) -> usize {
    html.select(&Selector::parse(selector).unwrap()).count()
}

/// Whitespace-normalised text of the first match.
pub fn text(html: &Html, selector: &str) -> String {
    html.select(&Selector::parse(selector).unwrap())
        .next()
        .map(|el| el.text().collect::<Vec<_>>().join(""))
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn attr(html: &Html, selector: &str, name: &str) -> Option<String> {
    html.select(&Selector::parse(selector).unwrap())
        .next()
        .and_then(|el| el.value().attr(name).map(str::to_string))
}

fn activity(id: i64, name: &str, description: &str, date: &str, location: &str, assoc: (i64, &str)) -> Activity {
    Activity::from_api(ApiActivity {
        id: Some(id),
        name: Some(name.into()),
        description: Some(description.into()),
        date: Some(date.into()),
        location: Some(location.into()),
        association_id: Some(assoc.0),
        association_name: Some(assoc.1.into()),
        activity_type: None,
    })
    .unwrap()
}

pub fn activities() -> Vec<Activity> {
    vec![
        activity(
            1,
            "Concerto de Natal",
            "Concerto de música tradicional natalícia pelo Coro de Valongo.",
            "2024-12-15",
            "Auditório Municipal, Valongo",
            (1, "Grupo Folclórico de Valongo"),
        ),
        activity(
            2,
            "Torneio de Karaté",
            "Competição regional de desporto para jovens atletas.",
            "2024-12-18",
            "Pavilhão de Ermesinde",
            (2, "Clube Desportivo de Ermesinde"),
        ),
        activity(
            3,
            "Peça de Teatro",
            "Comédia em três atos.",
            "2024-12-22",
            "Auditório de Sobrado",
            (3, "Grupo de Teatro de Sobrado"),
        ),
        activity(
            4,
            "Aula de Dança",
            "Dança tradicional para seniores.",
            "2025-01-05T18:30:00",
            "Centro Cívico de Alfena",
            (4, "Universidade Sénior de Alfena"),
        ),
    ]
}

fn association(id: i64, name: &str, address: &str, kind: &str, categories: &[&str]) -> Association {
    Association::from_api(ApiAssociation {
        id: Some(id),
        name: Some(name.into()),
        description: Some(format!("{name} no concelho de Valongo.")),
        address: Some(address.into()),
        email: Some(format!("geral{id}@associaval.pt")),
        activity_type: Some(kind.into()),
        activity_categories: Some(categories.iter().map(|c| c.to_string()).collect()),
        ..Default::default()
    })
    .unwrap()
}

pub fn associations() -> Vec<Association> {
    vec![
        association(
            1,
            "Grupo Folclórico de Valongo",
            "Rua da Igreja, Valongo",
            "cultura",
            &["🎵 - Música", "💃 - Dança"],
        ),
        association(
            2,
            "Clube Desportivo de Ermesinde",
            "Rua do Estádio, Ermesinde",
            "desporto",
            &["⚽ - Futebol", "🥋 - Karaté"],
        ),
        association(
            3,
            "Grupo de Teatro de Sobrado",
            "Largo do Sobrado",
            "cultura",
            &["🎭 - Teatro"],
        ),
    ]
}
