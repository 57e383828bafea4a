//! The member pages as plain per-URL handlers that write their own HTML.
//! They share the store with the front controller but bypass it entirely.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Uri},
    response::{Html, IntoResponse, Response},
};
use maud::{html, Markup, DOCTYPE};
use shared::{domain::Member, protocol::ParamMap};

use crate::{
    app_state::AppState,
    front::{error_response, request_params},
};
use frontcontroller::DispatchError;

fn page(body: Markup) -> Html<String> {
    Html(
        html! {
            (DOCTYPE)
            html {
                head { meta charset="utf-8"; }
                body { (body) }
            }
        }
        .into_string(),
    )
}

pub(crate) async fn new_form() -> Html<String> {
    page(html! {
        form action="/servlet/members/save" method="post" {
            "username: " input type="text" name="username";
            "age: " input type="text" name="age";
            button type="submit" { "Save" }
        }
    })
}

pub(crate) async fn save(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let params = request_params(uri.query(), &headers, &body);
    let member = match parse_and_save(&state, &params) {
        Ok(member) => member,
        Err(err) => return error_response(&err),
    };
    page(html! {
        "Saved"
        ul {
            li { "id=" (member.id) }
            li { "username=" (member.username) }
            li { "age=" (member.age) }
        }
        a href="/servlet/members/new-form" { "Register" }
        " "
        a href="/servlet/members" { "Members" }
    })
    .into_response()
}

fn parse_and_save(state: &AppState, params: &ParamMap) -> Result<Member, DispatchError> {
    let username = params
        .get("username")
        .ok_or_else(|| DispatchError::malformed("username", "parameter is required"))?;
    let age = params
        .get("age")
        .ok_or_else(|| DispatchError::malformed("age", "parameter is required"))?
        .parse::<i32>()
        .map_err(|e| DispatchError::malformed("age", e.to_string()))?;
    Ok(state.store.save(username, age)?)
}

pub(crate) async fn members(State(state): State<Arc<AppState>>) -> Response {
    let members = match state.store.find_all() {
        Ok(members) => members,
        Err(err) => return error_response(&DispatchError::from(err)),
    };
    page(html! {
        a href="/servlet/members/new-form" { "Register" }
        table {
            thead {
                tr { th { "id" } th { "username" } th { "age" } }
            }
            tbody {
                @for member in &members {
                    tr {
                        td { (member.id) }
                        td { (member.username) }
                        td { (member.age) }
                    }
                }
            }
        }
    })
    .into_response()
}

#[cfg(test)]
#[path = "tests/servlet_tests.rs"]
mod tests;
