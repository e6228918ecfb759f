use crate::config::SearchConfig;
use crate::debounce::settled_query;
use crate::domain::activity::{sort_newest_first, upcoming};
use crate::domain::calendar::{events_from_activities, sample_events, MonthGrid, YearMonth};
use crate::domain::{document, Activity, Association, Listing};
use crate::errors::ServerError;
use crate::filter::{FilterState, QueryBinding};
use crate::responses::{fragment_response, html_response, varying_html_response, ResultResp};
use crate::source::{RecordSource, SourceError};
use crate::templates::components::{empty_notice, load_error};
use crate::templates::pages;
use crate::view::{summary, ListingPanel};
use astra::Request;
use chrono::NaiveDate;
use maud::Markup;
use url::{form_urlencoded, Url};

/// Everything a request handler needs; shared read-only by all workers.
pub struct App {
    pub source: Box<dyn RecordSource>,
    pub search: SearchConfig,
    pub today: fn() -> NaiveDate,
}

impl App {
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = match req.uri().path() {
        "/" => "/",
        p => p.trim_end_matches('/'),
    };
    let query = req.uri().query().unwrap_or("");
    let is_htmx = req.headers().contains_key("HX-Request");
    let current_url = req
        .headers()
        .get("HX-Current-URL")
        .and_then(|v| v.to_str().ok());
    let list = |fragment: bool| Criteria {
        query,
        fragment,
        current_url: if fragment { current_url } else { None },
    };

    match (method, path) {
        ("GET", "/") => home(app),

        ("GET", "/atividades") => activities(app, list(false)),
        ("GET", "/atividades/lista") => activities(app, list(true)),

        ("GET", "/associacoes") => associations(app, list(false)),
        ("GET", "/associacoes/lista") => associations(app, list(true)),
        ("GET", p) if p.starts_with("/associacoes/") => {
            association_detail(app, &p["/associacoes/".len()..])
        }

        ("GET", "/documentos") => documents(app, list(false)),
        ("GET", "/documentos/lista") => documents(app, list(true)),

        ("GET", "/calendario") => calendar(app, query, is_htmx),

        _ => Err(ServerError::NotFound),
    }
}

/// Where a listing request's criteria come from.
struct Criteria<'a> {
    query: &'a str,
    /// Only the list fragment is wanted.
    fragment: bool,
    /// The page the fragment will be swapped into, as reported by htmx.
    current_url: Option<&'a str>,
}

/// Reads the criteria from the query string. A search shorter than the
/// minimum length counts as no search.
fn hydrate(binding: QueryBinding, query: &str, search: &SearchConfig) -> FilterState {
    let mut state = binding.parse(query);
    if let Some(raw) = state.search.take() {
        if let Some(settled) = settled_query(&raw, search) {
            state.set_search(settled);
        }
    }
    state
}

/// Source failures are logged and replaced by a fallback; they never turn
/// into an error response.
fn load<T>(what: &str, result: Result<T, SourceError>) -> Option<T> {
    match result {
        Ok(records) => Some(records),
        Err(err) => {
            tracing::error!(%err, what, "failed to load records");
            None
        }
    }
}

fn param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

/// Location the browser should show for `state`. Parameters we do not own
/// are kept when htmx tells us the current page URL.
fn push_url(binding: QueryBinding, page_path: &str, state: &FilterState, current: Option<&str>) -> String {
    match current.and_then(|raw| Url::parse(raw).ok()) {
        Some(mut url) if url.path() == page_path => {
            binding.apply_to_url(&mut url, state);
            match url.query() {
                Some(q) => format!("{page_path}?{q}"),
                None => page_path.to_string(),
            }
        }
        _ => binding.location(page_path, state),
    }
}

/// Renders either the full page or just the list fragment.
fn respond(
    criteria: &Criteria<'_>,
    binding: QueryBinding,
    page_path: &str,
    state: &FilterState,
    list: Markup,
    page: impl FnOnce(Markup) -> Markup,
) -> ResultResp {
    if criteria.fragment {
        fragment_response(list, &push_url(binding, page_path, state, criteria.current_url))
    } else {
        html_response(page(list))
    }
}

fn synchronized<'a, R: Listing>(
    noun: summary::Noun,
    records: &'a [R],
    state: &FilterState,
    today: NaiveDate,
) -> ListingPanel<'a, R> {
    let mut panel = ListingPanel::new(noun, records);
    panel.synchronize(state, today);
    panel
}

fn home(app: &App) -> ResultResp {
    let today = app.today();
    let associations = load("associations", app.source.associations());
    let activities = load("activities", app.source.activities());

    let soon: Option<Vec<&Activity>> = activities.as_deref().map(|list| upcoming(list, today));
    let grid = month_grid(YearMonth::of(today), today, activities.as_deref())
        .ok_or(ServerError::InternalError)?;

    html_response(pages::home_page(
        pages::featured_associations(associations.as_deref()),
        pages::upcoming_activities(soon.as_deref()),
        pages::calendar_widget(&grid),
    ))
}

fn activities(app: &App, criteria: Criteria<'_>) -> ResultResp {
    let today = app.today();
    let state = hydrate(QueryBinding::ACTIVITIES, criteria.query, &app.search);
    let loaded = load("activities", app.source.activities()).map(|mut list| {
        sort_newest_first(&mut list);
        list
    });

    let list = match &loaded {
        None => load_error("Erro ao carregar atividades. Tente novamente mais tarde."),
        Some(records) if records.is_empty() => empty_notice(&[
            "Ainda não há atividades registadas.",
            "As associações podem adicionar as suas atividades através do sistema de gestão.",
        ]),
        Some(records) => {
            let panel = synchronized(summary::ACTIVITY, records, &state, today);
            pages::activities_list(&panel, &state, today)
        }
    };

    respond(&criteria, QueryBinding::ACTIVITIES, pages::activities::PAGE_PATH, &state, list, |list| {
        pages::activities_page(&state, &app.search, list)
    })
}

fn associations(app: &App, criteria: Criteria<'_>) -> ResultResp {
    let today = app.today();
    let state = hydrate(QueryBinding::TYPED, criteria.query, &app.search);
    let loaded: Option<Vec<Association>> = load("associations", app.source.associations());

    let list = match &loaded {
        None => load_error("Erro ao carregar associações. Tente novamente mais tarde."),
        Some(records) if records.is_empty() => empty_notice(&[
            "Ainda não há associações registadas.",
            "As associações podem registar-se através do sistema de gestão.",
        ]),
        Some(records) => {
            let panel = synchronized(summary::ASSOCIATION, records, &state, today);
            pages::associations_list(&panel, &state)
        }
    };

    respond(&criteria, QueryBinding::TYPED, pages::associations::PAGE_PATH, &state, list, |list| {
        pages::associations_page(&state, &app.search, list)
    })
}

fn association_detail(app: &App, raw_id: &str) -> ResultResp {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| ServerError::BadRequest("ID da associação inválido.".into()))?;

    let association = match app.source.association(id) {
        Ok(association) => association,
        Err(err @ SourceError::NotFound(_)) => return Err(err.into()),
        Err(err) => {
            tracing::error!(%err, id, "failed to load association");
            return html_response(pages::association_unavailable_page());
        }
    };

    let activities = load("association activities", app.source.association_activities(id));
    html_response(pages::association_detail_page(
        &association,
        activities.as_deref(),
        app.today(),
    ))
}

fn documents(app: &App, criteria: Criteria<'_>) -> ResultResp {
    let state = hydrate(QueryBinding::TYPED, criteria.query, &app.search);
    let panel = synchronized(summary::DOCUMENT, document::catalog(), &state, app.today());
    let list = pages::documents_list(&panel, &state);

    respond(&criteria, QueryBinding::TYPED, pages::documents::PAGE_PATH, &state, list, |list| {
        pages::documents_page(&state, &app.search, list)
    })
}

fn calendar(app: &App, query: &str, fragment: bool) -> ResultResp {
    let today = app.today();
    let month = param(query, "mes")
        .and_then(|raw| YearMonth::parse(&raw))
        .unwrap_or_else(|| YearMonth::of(today));
    let activities = load("activities", app.source.activities());
    let grid = month_grid(month, today, activities.as_deref())
        .or_else(|| {
            tracing::debug!(month = %month.to_param(), "month out of range, showing current month");
            month_grid(YearMonth::of(today), today, activities.as_deref())
        })
        .ok_or(ServerError::InternalError)?;

    if fragment {
        varying_html_response(pages::calendar_widget(&grid))
    } else {
        varying_html_response(pages::calendar_page(&grid))
    }
}

/// Falls back to the sample events when nothing dated is available.
fn month_grid(month: YearMonth, today: NaiveDate, activities: Option<&[Activity]>) -> Option<MonthGrid> {
    let mut events = activities.map(events_from_activities).unwrap_or_default();
    if events.is_empty() {
        tracing::debug!("no dated activities, using sample calendar events");
        events = sample_events();
    }
    MonthGrid::build(month, today, &events)
}
