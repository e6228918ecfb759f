use crate::config::AppConfig;
use crate::logging::init_logging;
use crate::responses::html_error_response;
use crate::router::{handle, App};
use crate::source::ApiClient;
use astra::{Request, Server};
use std::time::Instant;

mod config;
mod debounce;
mod domain;
mod errors;
mod filter;
mod logging;
mod responses;
mod router;
mod source;
mod templates;
mod view;


fn main() {
    init_logging();

    let cfg = AppConfig::from_env();

    let client = match ApiClient::new(&cfg) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "could not build the backend client");
            std::process::exit(1);
        }
    };

    let app = App {
        source: Box::new(client),
        search: cfg.search,
        today: || chrono::Local::now().date_naive(),
    };

    tracing::info!(
        addr = %cfg.bind,
        api = %cfg.api_base,
        workers = cfg.workers,
        "starting server"
    );

    let server = Server::bind(&cfg.bind).max_workers(cfg.workers);

    let result = server.serve(move |req: Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%method, %path, error = %err, "request failed");
                html_error_response(err)
            }
        };

        tracing::info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    match result {
        Ok(()) => tracing::info!("server shut down cleanly"),
        Err(e) => {
            tracing::error!(error = %e, "server ended with error");
            std::process::exit(1);
        }
    }
}
