use maud::{Markup, html};

use super::layout;
use crate::store::Restaurant;
use crate::validator::is_http_url;

fn base_path(r: &Restaurant) -> String {
    format!("/restaurants/{}", r.id)
}

fn delete_button(r: &Restaurant) -> Markup {
    html! {
        form.inline action={ (base_path(r)) "/delete" } method="post" {
            button.btn.btn-danger type="submit" { "Delete" }
        }
    }
}

fn card(r: &Restaurant) -> Markup {
    let base = base_path(r);
    html! {
        div.card {
            a href=(base) {
                @if let Some(image) = &r.image {
                    img.card-img src=(image) alt=(r.name);
                }
                h2.card-title { (r.name) }
            }
            p.card-category { (r.category) }
            @if let Some(rating) = &r.rating {
                span.badge { "★ " (rating) }
            }
            div.card-actions {
                a.btn href=(base) { "Details" }
                a.btn href={ (base) "/edit" } { "Edit" }
                (delete_button(r))
            }
        }
    }
}

/// Listing page. `keyword` is set when rendering search results.
pub fn index(restaurants: &[Restaurant], keyword: Option<&str>) -> Markup {
    layout(
        keyword,
        html! {
            @if restaurants.is_empty() {
                p.empty {
                    @if let Some(keyword) = keyword {
                        "No restaurants match \"" (keyword) "\"."
                    } @else {
                        "No restaurants yet."
                    }
                }
            } @else {
                div.card-list {
                    @for r in restaurants {
                        (card(r))
                    }
                }
            }
        },
    )
}

/// Detail page for a single restaurant.
pub fn show(r: &Restaurant) -> Markup {
    layout(
        None,
        html! {
            article.restaurant-detail {
                h1 {
                    (r.name)
                    @if let Some(name_en) = &r.name_en {
                        " " small { (name_en) }
                    }
                }
                @if let Some(image) = &r.image {
                    img.detail-img src=(image) alt=(r.name);
                }
                dl {
                    dt { "Category" } dd { (r.category) }
                    dt { "Location" } dd { (r.location) }
                    @if let Some(phone) = &r.phone {
                        dt { "Phone" } dd { (phone) }
                    }
                    @if let Some(rating) = &r.rating {
                        dt { "Rating" } dd { (rating) }
                    }
                    @if let Some(map) = &r.google_map {
                        dt { "Map" }
                        dd {
                            @if is_http_url(map) {
                                a href=(map) target="_blank" rel="noopener" { "Open in Google Maps" }
                            } @else {
                                code.map-embed { (map) }
                            }
                        }
                    }
                }
                @if let Some(description) = &r.description {
                    p.description { (description) }
                }
                div.detail-actions {
                    a.btn href={ (base_path(r)) "/edit" } { "Edit" }
                    (delete_button(r))
                    a.btn href="/" { "Back" }
                }
            }
        },
    )
}
