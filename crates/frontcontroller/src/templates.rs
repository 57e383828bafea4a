use maud::{html, Markup, DOCTYPE};
use shared::{domain::Member, error::ApiError, protocol::Model};

use crate::{
    error::DispatchError, member_detail_route, members_route, new_form_route, view::attribute,
};

fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body { (body) }
        }
    }
}

fn nav() -> Markup {
    html! {
        p {
            a href=(new_form_route()) { "Register" }
            " | "
            a href=(members_route()) { "Members" }
        }
    }
}

fn member_fields(member: &Member) -> Markup {
    html! {
        ul {
            li { "id=" (member.id) }
            li { "username=" (member.username) }
            li { "age=" (member.age) }
        }
    }
}

pub fn new_form(_model: &Model) -> Result<Markup, DispatchError> {
    Ok(page(
        "Register member",
        html! {
            form action="save" method="post" {
                label { "username: " input type="text" name="username"; }
                label { "age: " input type="text" name="age"; }
                button type="submit" { "Save" }
            }
        },
    ))
}

pub fn save_result(model: &Model) -> Result<Markup, DispatchError> {
    let member: Member = attribute(model, "member")?;
    Ok(page(
        "Member saved",
        html! {
            p { "Saved" }
            (member_fields(&member))
            (nav())
        },
    ))
}

pub fn members(model: &Model) -> Result<Markup, DispatchError> {
    let members: Vec<Member> = attribute(model, "members")?;
    Ok(page(
        "Members",
        html! {
            a href=(new_form_route()) { "Register" }
            table {
                thead {
                    tr { th { "id" } th { "username" } th { "age" } }
                }
                tbody {
                    @for member in &members {
                        tr {
                            td {
                                a href={ (member_detail_route()) "?id=" (member.id) } { (member.id) }
                            }
                            td { (member.username) }
                            td { (member.age) }
                        }
                    }
                }
            }
        },
    ))
}

pub fn member_detail(model: &Model) -> Result<Markup, DispatchError> {
    let member: Member = attribute(model, "member")?;
    Ok(page(
        "Member",
        html! {
            (member_fields(&member))
            (nav())
        },
    ))
}

/// Rendered directly by the server; error pages never go through the
/// resolver.
pub fn error_page(error: &ApiError) -> Markup {
    page(
        "Error",
        html! {
            h1 { (format!("{:?}", error.code)) }
            p { (error.message) }
            (nav())
        },
    )
}
