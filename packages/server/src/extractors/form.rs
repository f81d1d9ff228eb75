use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Message shown when a submitted body is not a readable HTML form.
pub const UNREADABLE_FORM_MESSAGE: &str =
    "The submitted form could not be read. Please go back and submit it again.";

/// Decodes an `application/x-www-form-urlencoded` body posted by the create
/// and edit pages.
///
/// Inputs the browser left out deserialize as blank text, so only a body that
/// is not a form at all (wrong content type, broken encoding) is rejected.
/// Rejections become a 400 error page instead of axum's plain-text reply.
pub struct AppForm<T>(pub T);

impl<S, T> FromRequest<S> for AppForm<T>
where
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(AppForm(value)),
            Err(rejection) => {
                tracing::warn!(reason = %rejection.body_text(), "rejected form submission");
                Err(AppError::BadRequest(UNREADABLE_FORM_MESSAGE.into()))
            }
        }
    }
}
