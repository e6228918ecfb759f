pub mod errors;
pub mod html;

pub use errors::{html_error_response, ResultResp};
pub use html::{fragment_response, html_response, varying_html_response};
