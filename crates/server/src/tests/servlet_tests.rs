use crate::build_router;

use super::*;
use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
    Router,
};
use frontcontroller::ViewResolver;
use storage::MemberStore;
use tower::ServiceExt;

fn test_app() -> (Router, MemberStore) {
    let store = MemberStore::new();
    let state = AppState::new(store.clone(), ViewResolver::default()).expect("state");
    (build_router(Arc::new(state)), store)
}

async fn body_text(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

#[tokio::test]
async fn servlet_form_posts_to_servlet_save() {
    let (app, _store) = test_app();
    let request = Request::get("/servlet/members/new-form")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains(r#"action="/servlet/members/save""#));
}

#[tokio::test]
async fn servlet_save_shares_the_store_with_front_controller() {
    let (app, store) = test_app();
    let request = Request::post("/servlet/members/save")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("username=alice&age=20"))
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("username=alice"));
    assert_eq!(store.len().expect("len"), 1);

    let request = Request::get("/members").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert!(body_text(response).await.contains("alice"));
}

#[tokio::test]
async fn servlet_save_accepts_negative_age() {
    let (app, store) = test_app();
    let request = Request::get("/servlet/members/save?username=bob&age=-3")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("age=-3"));
    assert_eq!(store.find_all().expect("members")[0].age, -3);
}

#[tokio::test]
async fn servlet_save_rejects_age_beyond_i32() {
    let (app, store) = test_app();
    let request = Request::get("/servlet/members/save?username=bob&age=2147483648")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(store.is_empty().expect("empty"));
}

#[tokio::test]
async fn servlet_save_without_form_body_renders_error_page() {
    let (app, store) = test_app();
    let request = Request::post("/servlet/members/save")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username":"bob","age":3}"#))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(html.contains("<title>Error</title>"));
    assert!(html.contains("username"));
    assert!(store.is_empty().expect("empty"));
}

#[tokio::test]
async fn servlet_list_shows_members() {
    let (app, store) = test_app();
    store.save("carol", 41).expect("carol");
    store.save("dave", 18).expect("dave");

    let request = Request::get("/servlet/members")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("carol"));
    assert!(html.contains("dave"));
}
