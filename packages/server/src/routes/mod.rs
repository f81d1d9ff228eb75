use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::restaurant;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurant::list_restaurants))
        .route("/search", get(restaurant::search_restaurants))
        .nest("/restaurants", restaurant_routes())
}

fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(restaurant::redirect_to_index).post(restaurant::create_restaurant),
        )
        .route("/new", get(restaurant::new_restaurant))
        .route("/{id}", get(restaurant::show_restaurant))
        .route(
            "/{id}/edit",
            get(restaurant::edit_restaurant).post(restaurant::update_restaurant),
        )
        .route("/{id}/delete", post(restaurant::delete_restaurant))
}
