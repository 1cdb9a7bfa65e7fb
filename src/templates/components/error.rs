use maud::{html, Markup, DOCTYPE};

/// Standalone error document; does not depend on the session.
pub fn error_page(app_name: &str, status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) " · " (app_name) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                main class="container narrow error-page" {
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Back to home" } }
                }
            }
        }
    }
}
