//! Server-rendered pages.
//!
//! Each function returns [`Markup`]; handlers wrap it in an HTML response.

mod form;
mod listing;

pub use form::{FormMode, REQUIRED_FIELDS_MESSAGE, restaurant_form};
pub use listing::{index, show};

use maud::{DOCTYPE, Markup, html};

const TITLE: &str = "My Restaurant List";

/// Shared document shell with the navigation bar and search box.
pub fn layout(keyword: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) }
                link rel="stylesheet" href="/stylesheets/index.css";
            }
            body {
                nav.navbar {
                    a.navbar-brand href="/" { (TITLE) }
                    a.btn href="/restaurants/new" { "Add restaurant" }
                }
                section.search-bar {
                    form action="/search" method="get" {
                        label for="search-keyword" { "Find a restaurant" }
                        input #search-keyword type="text" name="keyword"
                            placeholder="Restaurant name" value=(keyword.unwrap_or_default());
                        button type="submit" { "Search" }
                    }
                }
                main.container { (content) }
            }
        }
    }
}

/// Page shown for 404 and 500 responses.
pub fn error_page(status: u16, message: &str) -> Markup {
    layout(
        None,
        html! {
            div.error-page {
                h1 { (status) }
                p { (message) }
                a href="/" { "Back to the list" }
            }
        },
    )
}
