use std::sync::Arc;

use uuid::Uuid;

use restaurant_server::extractors::form::UNREADABLE_FORM_MESSAGE;
use restaurant_server::store::{RecordStore, StoreError};
use restaurant_server::views::REQUIRED_FIELDS_MESSAGE;

use crate::common::{FAILING_STORE_DETAIL, FailingStore, STYLESHEET, TestApp};

fn pizza_form<'a>(name: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("name", name),
        ("name_en", "Pizza Place EN"),
        ("category", "Italian"),
        ("image", "foo.com/p.jpg"),
        ("location", "Taipei"),
        ("phone", "02 1234 5678"),
        ("google_map", "https://goo.gl/maps/pizza"),
        ("rating", "4.5"),
        ("description", "Wood-fired"),
    ]
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn index_lists_every_restaurant() {
        let app = TestApp::spawn().await;
        app.create_restaurant("Pizza Place").await;
        app.create_restaurant("Sushi Bar").await;

        let res = app.get("/").await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Pizza Place"));
        assert!(res.text.contains("Sushi Bar"));
    }

    #[tokio::test]
    async fn index_shows_empty_state() {
        let app = TestApp::spawn().await;

        let res = app.get("/").await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("No restaurants yet."));
    }

    #[tokio::test]
    async fn restaurants_collection_redirects_to_index() {
        let app = TestApp::spawn().await;

        let res = app.get("/restaurants").await;

        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn static_assets_are_served_from_public_dir() {
        let app = TestApp::spawn().await;

        let res = app.get("/stylesheets/index.css").await;

        assert_eq!(res.status, 200);
        assert_eq!(res.text, STYLESHEET);
    }
}

mod detail {
    use super::*;

    #[tokio::test]
    async fn shows_a_single_restaurant() {
        let app = TestApp::spawn().await;
        let r = app.create_restaurant("Pizza Place").await;

        let res = app.get(&format!("/restaurants/{}", r.id)).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Pizza Place"));
        assert!(res.text.contains("Taipei"));
    }

    #[tokio::test]
    async fn unknown_id_returns_404() {
        let app = TestApp::spawn().await;

        let res = app.get(&format!("/restaurants/{}", Uuid::now_v7())).await;

        assert_eq!(res.status, 404);
        assert!(res.text.contains("Restaurant not found"));
    }

    #[tokio::test]
    async fn script_map_value_is_not_rendered_as_link() {
        let app = TestApp::spawn().await;
        let mut form = pizza_form("Pizza Place");
        for field in form.iter_mut() {
            if field.0 == "google_map" {
                field.1 = "javascript:alert(document.cookie)";
            }
        }
        let res = app.post_form("/restaurants", &form).await;
        assert_eq!(res.status, 303);
        let r = &app.all_restaurants().await[0];

        let res = app.get(&format!("/restaurants/{}", r.id)).await;

        assert_eq!(res.status, 200);
        assert!(!res.text.contains("href=\"javascript:"));
        assert!(res.text.contains("javascript:alert(document.cookie)"));
    }

    #[tokio::test]
    async fn http_map_value_is_rendered_as_link() {
        let app = TestApp::spawn().await;
        app.post_form("/restaurants", &pizza_form("Pizza Place"))
            .await;
        let r = &app.all_restaurants().await[0];

        let res = app.get(&format!("/restaurants/{}", r.id)).await;

        assert!(res.text.contains("href=\"https://goo.gl/maps/pizza\""));
    }

    #[tokio::test]
    async fn malformed_id_returns_404() {
        let app = TestApp::spawn().await;

        let res = app.get("/restaurants/not-an-id").await;

        assert_eq!(res.status, 404);
    }
}

mod creation {
    use super::*;

    #[tokio::test]
    async fn new_form_is_empty() {
        let app = TestApp::spawn().await;

        let res = app.get("/restaurants/new").await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("action=\"/restaurants\""));
        assert!(!res.text.contains(REQUIRED_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn valid_form_creates_and_redirects() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form("/restaurants", &pizza_form("Pizza Place"))
            .await;

        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/"));

        let all = app.all_restaurants().await;
        assert_eq!(all.len(), 1);
        let r = &all[0];
        assert_eq!(r.name, "Pizza Place");
        assert_eq!(r.name_en.as_deref(), Some("Pizza Place EN"));
        assert_eq!(r.rating.as_deref(), Some("4.5"));
        assert_eq!(r.image.as_deref(), Some("http://foo.com/p.jpg"));
    }

    #[tokio::test]
    async fn image_with_scheme_is_kept() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                "/restaurants",
                &[
                    ("name", "Sushi Bar"),
                    ("category", "Japanese"),
                    ("location", "Tokyo"),
                    ("image", "https://img.example/sushi.png"),
                ],
            )
            .await;

        assert_eq!(res.status, 303);
        let all = app.all_restaurants().await;
        assert_eq!(all[0].image.as_deref(), Some("https://img.example/sushi.png"));
        assert_eq!(all[0].phone, None);
    }

    #[tokio::test]
    async fn missing_name_rerenders_form_with_input() {
        let app = TestApp::spawn().await;

        let res = app.post_form("/restaurants", &pizza_form("")).await;

        assert_eq!(res.status, 422);
        assert!(res.text.contains(REQUIRED_FIELDS_MESSAGE));
        assert!(res.text.contains("value=\"Italian\""));
        assert!(res.text.contains("value=\"Taipei\""));
        assert!(res.text.contains("value=\"foo.com/p.jpg\""));
        assert!(res.text.contains("Wood-fired"));
        assert!(app.all_restaurants().await.is_empty());
    }

    #[tokio::test]
    async fn whitespace_only_fields_are_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                "/restaurants",
                &[("name", "Pizza"), ("category", "   "), ("location", "Taipei")],
            )
            .await;

        assert_eq!(res.status, 422);
        assert!(app.all_restaurants().await.is_empty());
    }

    #[tokio::test]
    async fn non_form_body_returns_400_page() {
        let app = TestApp::spawn().await;

        let res = app
            .post_raw(
                "/restaurants",
                "application/json",
                r#"{"name": "Pizza", "category": "Italian", "location": "Taipei"}"#,
            )
            .await;

        assert_eq!(res.status, 400);
        assert!(res.text.contains(UNREADABLE_FORM_MESSAGE));
        assert!(app.all_restaurants().await.is_empty());
    }

    #[tokio::test]
    async fn missing_fields_in_body_count_as_blank() {
        let app = TestApp::spawn().await;

        let res = app.post_form("/restaurants", &[("name", "Pizza")]).await;

        assert_eq!(res.status, 422);
        assert!(app.all_restaurants().await.is_empty());
    }
}

mod editing {
    use super::*;

    #[tokio::test]
    async fn edit_form_is_prefilled() {
        let app = TestApp::spawn().await;
        let r = app.create_restaurant("Pizza Place").await;

        let res = app.get(&format!("/restaurants/{}/edit", r.id)).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains(&format!("action=\"/restaurants/{}/edit\"", r.id)));
        assert!(res.text.contains("value=\"Pizza Place\""));
        assert!(res.text.contains("value=\"Italian\""));
    }

    #[tokio::test]
    async fn edit_form_for_unknown_id_returns_404() {
        let app = TestApp::spawn().await;

        let res = app
            .get(&format!("/restaurants/{}/edit", Uuid::now_v7()))
            .await;

        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn valid_update_replaces_fields_and_redirects_to_detail() {
        let app = TestApp::spawn().await;
        let r = app
            .store
            .create(restaurant_server::models::restaurant::RestaurantFields {
                phone: Some("02 0000 0000".into()),
                ..crate::common::fields("Pizza Place", "Italian", "Taipei")
            })
            .await
            .unwrap();

        let res = app
            .post_form(
                &format!("/restaurants/{}/edit", r.id),
                &[
                    ("name", "Pasta Place"),
                    ("category", "Italian"),
                    ("location", "Tainan"),
                    ("image", "cdn.example/pasta.jpg"),
                ],
            )
            .await;

        assert_eq!(res.status, 303);
        assert_eq!(res.location, Some(format!("/restaurants/{}", r.id)));

        let updated = app.store.find_by_id(r.id).await.unwrap();
        assert_eq!(updated.name, "Pasta Place");
        assert_eq!(updated.location, "Tainan");
        assert_eq!(updated.image.as_deref(), Some("http://cdn.example/pasta.jpg"));
        assert_eq!(updated.phone, None);
    }

    #[tokio::test]
    async fn invalid_update_rerenders_edit_form() {
        let app = TestApp::spawn().await;
        let r = app.create_restaurant("Pizza Place").await;

        let res = app
            .post_form(
                &format!("/restaurants/{}/edit", r.id),
                &[("name", "Renamed"), ("category", "Italian"), ("location", "")],
            )
            .await;

        assert_eq!(res.status, 422);
        assert!(res.text.contains(REQUIRED_FIELDS_MESSAGE));
        assert!(res.text.contains(&format!("action=\"/restaurants/{}/edit\"", r.id)));
        assert!(res.text.contains("value=\"Renamed\""));

        let unchanged = app.store.find_by_id(r.id).await.unwrap();
        assert_eq!(unchanged.name, "Pizza Place");
    }

    #[tokio::test]
    async fn update_of_unknown_id_returns_404() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                &format!("/restaurants/{}/edit", Uuid::now_v7()),
                &pizza_form("Pizza Place"),
            )
            .await;

        assert_eq!(res.status, 404);
        assert!(app.all_restaurants().await.is_empty());
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn delete_removes_and_redirects() {
        let app = TestApp::spawn().await;
        let r = app.create_restaurant("Pizza Place").await;
        let kept = app.create_restaurant("Sushi Bar").await;

        let res = app
            .post_form(&format!("/restaurants/{}/delete", r.id), &[])
            .await;

        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/"));
        assert!(matches!(
            app.store.find_by_id(r.id).await,
            Err(StoreError::NotFound(id)) if id == r.id
        ));
        assert!(app.store.find_by_id(kept.id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_returns_404() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(&format!("/restaurants/{}/delete", Uuid::now_v7()), &[])
            .await;

        assert_eq!(res.status, 404);
    }
}

mod search {
    use super::*;

    #[tokio::test]
    async fn keyword_filters_by_name_case_insensitively() {
        let app = TestApp::spawn().await;
        app.create_restaurant("Pizza Place").await;
        app.create_restaurant("Sushi Bar").await;

        let res = app.get("/search?keyword=piz").await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Pizza Place"));
        assert!(!res.text.contains("Sushi Bar"));
        assert!(res.text.contains("value=\"piz\""));

        let res = app.get("/search?keyword=SUSHI").await;
        assert!(res.text.contains("Sushi Bar"));
        assert!(!res.text.contains("Pizza Place"));
    }

    #[tokio::test]
    async fn blank_keyword_redirects_to_index() {
        let app = TestApp::spawn().await;

        let res = app.get("/search?keyword=%20%20%20").await;
        assert_eq!(res.status, 303);
        assert_eq!(res.location.as_deref(), Some("/"));

        let res = app.get("/search").await;
        assert_eq!(res.status, 303);
    }

    #[tokio::test]
    async fn keyword_whitespace_is_part_of_the_match() {
        let app = TestApp::spawn().await;
        app.create_restaurant("Pizza").await;
        app.create_restaurant("Sushi Bar").await;

        let res = app.get("/search?keyword=pizza%20").await;
        assert_eq!(res.status, 200);
        assert!(res.text.contains("No restaurants match"));
        assert!(!res.text.contains("Sushi Bar"));

        let res = app.get("/search?keyword=%20bar").await;
        assert_eq!(res.status, 200);
        assert!(res.text.contains("Sushi Bar"));
        assert!(!res.text.contains("Pizza<"));
    }

    #[tokio::test]
    async fn keyword_without_match_shows_no_results() {
        let app = TestApp::spawn().await;
        app.create_restaurant("Pizza Place").await;

        let res = app.get("/search?keyword=ramen").await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("No restaurants match"));
        assert!(!res.text.contains("Pizza Place"));
    }
}

mod store_failures {
    use super::*;

    #[tokio::test]
    async fn listing_returns_500_page_without_detail() {
        let app = TestApp::spawn_with_backend(Arc::new(FailingStore)).await;

        let res = app.get("/").await;

        assert_eq!(res.status, 500);
        assert!(res.text.contains("Something went wrong"));
        assert!(!res.text.contains(FAILING_STORE_DETAIL));
    }

    #[tokio::test]
    async fn create_returns_500_when_store_fails() {
        let app = TestApp::spawn_with_backend(Arc::new(FailingStore)).await;

        let res = app
            .post_form("/restaurants", &pizza_form("Pizza Place"))
            .await;

        assert_eq!(res.status, 500);
        assert!(!res.text.contains(FAILING_STORE_DETAIL));
    }
}
