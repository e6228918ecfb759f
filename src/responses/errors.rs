use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Página não encontrada."),
        ServerError::BadRequest(msg) => render_error(400, &msg),
        ServerError::Source(msg) => {
            tracing::error!(%msg, "record source error reached the router");
            render_error(502, "Serviço temporariamente indisponível. Tente novamente mais tarde.")
        }
        ServerError::InternalError => render_error(500, "Erro interno do servidor."),
    }
}

fn render_error(status: u16, message: &str) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
