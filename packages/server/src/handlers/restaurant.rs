use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use maud::Markup;
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::form::AppForm;
use crate::models::restaurant::{RestaurantForm, SearchQuery, filter_by_name};
use crate::state::AppState;
use crate::views::{self, FormMode};

fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

/// Ids that do not parse cannot name a stored record.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Restaurant not found".into()))
}

/// Re-render the form with the user's input and the error flag set.
fn invalid_form(mode: FormMode, form: &RestaurantForm) -> Response {
    tracing::warn!(?mode, "restaurant form is missing required fields");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        render(views::restaurant_form(mode, form, true)),
    )
        .into_response()
}

#[instrument(skip(state))]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let restaurants = state.store.list_all().await?;
    Ok(render(views::index(&restaurants, None)))
}

pub async fn redirect_to_index() -> Redirect {
    Redirect::to("/")
}

pub async fn new_restaurant() -> Html<String> {
    render(views::restaurant_form(
        FormMode::New,
        &RestaurantForm::default(),
        false,
    ))
}

#[instrument(skip(state))]
pub async fn show_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let restaurant = state.store.find_by_id(id).await?;
    Ok(render(views::show(&restaurant)))
}

#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn create_restaurant(
    State(state): State<AppState>,
    AppForm(form): AppForm<RestaurantForm>,
) -> Result<Response, AppError> {
    let Some(fields) = form.validate() else {
        return Ok(invalid_form(FormMode::New, &form));
    };

    state.store.create(fields).await?;
    Ok(Redirect::to("/").into_response())
}

#[instrument(skip(state))]
pub async fn edit_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let restaurant = state.store.find_by_id(id).await?;
    Ok(render(views::restaurant_form(
        FormMode::Edit(id),
        &RestaurantForm::from(&restaurant),
        false,
    )))
}

#[instrument(skip(state, form))]
pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppForm(form): AppForm<RestaurantForm>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let Some(fields) = form.validate() else {
        return Ok(invalid_form(FormMode::Edit(id), &form));
    };

    state.store.update(id, fields).await?;
    Ok(Redirect::to(&format!("/restaurants/{id}")).into_response())
}

#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    Ok(Redirect::to("/"))
}

#[instrument(skip(state))]
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    if query.keyword.trim().is_empty() {
        return Ok(Redirect::to("/").into_response());
    }
    let keyword = query.keyword.as_str();

    let restaurants = filter_by_name(state.store.list_all().await?, keyword);
    tracing::debug!(keyword, matches = restaurants.len(), "search finished");
    Ok(render(views::index(&restaurants, Some(keyword))).into_response())
}
