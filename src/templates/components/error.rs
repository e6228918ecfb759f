use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Erro {status}"),
        "",
        html! {
            section class="error-page" {
                h1 { "Erro " (status) }
                p { (message) }
                p { a href="/" { "← Voltar ao início" } }
            }
        },
    )
}
