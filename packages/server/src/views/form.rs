use maud::{Markup, html};
use uuid::Uuid;

use super::layout;
use crate::models::restaurant::RestaurantForm;

/// Message shown when a required field is blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, category and location are required.";

/// Which page the form belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(Uuid),
}

impl FormMode {
    fn action(&self) -> String {
        match self {
            FormMode::New => "/restaurants".to_string(),
            FormMode::Edit(id) => format!("/restaurants/{id}/edit"),
        }
    }

    fn cancel_href(&self) -> String {
        match self {
            FormMode::New => "/".to_string(),
            FormMode::Edit(id) => format!("/restaurants/{id}"),
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            FormMode::New => "New restaurant",
            FormMode::Edit(_) => "Edit restaurant",
        }
    }
}

fn text_input(name: &str, label: &str, value: &str, required: bool) -> Markup {
    html! {
        div.form-group {
            label for=(name) {
                (label)
                @if required { " *" }
            }
            input id=(name) type="text" name=(name) value=(value) required[required];
        }
    }
}

/// Create/edit form, pre-filled with `form`. With `is_error` set, an alert
/// about the required fields is shown above the inputs.
pub fn restaurant_form(mode: FormMode, form: &RestaurantForm, is_error: bool) -> Markup {
    layout(
        None,
        html! {
            h1 { (mode.heading()) }
            @if is_error {
                div.alert.alert-danger role="alert" { (REQUIRED_FIELDS_MESSAGE) }
            }
            form.restaurant-form action=(mode.action()) method="post" {
                (text_input("name", "Name", &form.name, true))
                (text_input("name_en", "English name", &form.name_en, false))
                (text_input("category", "Category", &form.category, true))
                (text_input("image", "Image URL", &form.image, false))
                (text_input("location", "Location", &form.location, true))
                (text_input("phone", "Phone", &form.phone, false))
                (text_input("google_map", "Google Maps link", &form.google_map, false))
                (text_input("rating", "Rating", &form.rating, false))
                div.form-group {
                    label for="description" { "Description" }
                    textarea id="description" name="description" rows="4" { (form.description) }
                }
                button.btn.btn-primary type="submit" { "Save" }
                a.btn href=(mode.cancel_href()) { "Cancel" }
            }
        },
    )
}
