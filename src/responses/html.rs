use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// Lets the browser location follow the criteria of an htmx swap.
pub const HX_PUSH_URL: &str = "HX-Push-Url";

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Same URL serves a full page or a widget depending on `HX-Request`.
pub fn varying_html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header("Vary", "HX-Request")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// An htmx fragment; `push_url` becomes the new browser location.
pub fn fragment_response(markup: Markup, push_url: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header(HX_PUSH_URL, push_url)
        .header("Vary", "HX-Request")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
