use shared::{
    domain::MemberId,
    protocol::{views, Model, ModelView, ParamMap},
};
use storage::MemberStore;

use crate::{adapter::ModelController, error::DispatchError};

/// A controller that sees only the request parameters and answers with a
/// view name plus the model for that view.
pub trait Controller: Send + Sync {
    fn process(&self, params: &ParamMap) -> Result<ModelView, DispatchError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MemberFormController;

impl Controller for MemberFormController {
    fn process(&self, _params: &ParamMap) -> Result<ModelView, DispatchError> {
        Ok(ModelView::new(views::NEW_FORM))
    }
}

#[derive(Debug, Clone)]
pub struct MemberSaveController {
    store: MemberStore,
}

impl MemberSaveController {
    pub fn new(store: MemberStore) -> Self {
        Self { store }
    }
}

impl Controller for MemberSaveController {
    fn process(&self, params: &ParamMap) -> Result<ModelView, DispatchError> {
        let username = required(params, "username")?;
        let age = required(params, "age")?
            .parse::<i32>()
            .map_err(|e| DispatchError::malformed("age", e.to_string()))?;

        let member = self.store.save(username, age)?;
        ModelView::new(views::SAVE_RESULT)
            .with("member", &member)
            .map_err(|e| DispatchError::model_attribute("member", e))
    }
}

#[derive(Debug, Clone)]
pub struct MemberListController {
    store: MemberStore,
}

impl MemberListController {
    pub fn new(store: MemberStore) -> Self {
        Self { store }
    }
}

impl Controller for MemberListController {
    fn process(&self, _params: &ParamMap) -> Result<ModelView, DispatchError> {
        let members = self.store.find_all()?;
        ModelView::new(views::MEMBERS)
            .with("members", &members)
            .map_err(|e| DispatchError::model_attribute("members", e))
    }
}

/// Looks a single member up by the `id` parameter. Written against the
/// model-filling controller style.
#[derive(Debug, Clone)]
pub struct MemberDetailController {
    store: MemberStore,
}

impl MemberDetailController {
    pub fn new(store: MemberStore) -> Self {
        Self { store }
    }
}

impl ModelController for MemberDetailController {
    fn process(&self, params: &ParamMap, model: &mut Model) -> Result<String, DispatchError> {
        let id = required(params, "id")?
            .parse::<i64>()
            .map(MemberId)
            .map_err(|e| DispatchError::malformed("id", e.to_string()))?;

        let member = self.store.find_by_id(id)?;
        let value =
            serde_json::to_value(&member).map_err(|e| DispatchError::model_attribute("member", e))?;
        model.insert("member".to_string(), value);
        Ok(views::MEMBER_DETAIL.to_string())
    }
}

fn required<'a>(params: &'a ParamMap, field: &str) -> Result<&'a str, DispatchError> {
    params
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| DispatchError::malformed(field, "parameter is required"))
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
