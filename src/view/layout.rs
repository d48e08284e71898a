use maud::{html, Markup, DOCTYPE};

pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | QR Ticketing System" }
            }
            body {
                nav {
                    a href="/" { "New ticket" }
                    " | "
                    a href="/get" { "Tickets" }
                    " | "
                    a href="/about" { "About" }
                }
                main {
                    (content)
                }
            }
        }
    }
}
