use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const NAV: [(&str, &str); 5] = [
    ("/", "Início"),
    ("/associacoes", "Associações"),
    ("/atividades", "Atividades"),
    ("/documentos", "Documentos"),
    ("/calendario", "Calendário"),
];

/// `active` is the path of the current section, used to flag the nav link.
pub fn desktop_layout(title: &str, active: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | AssociaVal" }
                script src=(HTMX_SRC) defer {};
                style {
                    "mark { background: #fde68a; padding: 0 .1em; }"
                    ".other-month { opacity: .4; }"
                    ".today { outline: 2px solid #524ed2; }"
                }
            }
            body {
                header class="site-header" {
                    a class="brand" href="/" { "AssociaVal" }
                    nav {
                        ul {
                            @for (href, label) in NAV {
                                li {
                                    a href=(href) class=[(href == active).then_some("active")] { (label) }
                                }
                            }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer class="site-footer" {
                    p { "Movimento associativo do concelho de Valongo" }
                }
            }
        }
    }
}
