//! Front controller for the member registration pages.
//!
//! Every request path is looked up in a registry of [`Handler`]s, the handler
//! produces a [`ModelView`](shared::protocol::ModelView), and the view name is
//! resolved to a template path which a [`ViewRenderer`] turns into HTML.

pub mod adapter;
pub mod controller;
pub mod dispatcher;
pub mod error;
pub mod templates;
pub mod view;

pub use adapter::{Handler, ModelController};
pub use controller::Controller;
pub use dispatcher::{FrontController, FrontControllerBuilder, Rendered};
pub use error::DispatchError;
pub use view::{TemplateSet, View, ViewRenderer, ViewResolver};

pub fn new_form_route() -> &'static str {
    "/members/new-form"
}

pub fn save_route() -> &'static str {
    "/members/save"
}

pub fn members_route() -> &'static str {
    "/members"
}

pub fn member_detail_route() -> &'static str {
    "/members/detail"
}
