use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request parameters, first value per name.
pub type ParamMap = HashMap<String, String>;

/// Named attributes handed from a controller to its view.
pub type Model = BTreeMap<String, Value>;

pub mod views {
    pub const NEW_FORM: &str = "new-form";
    pub const SAVE_RESULT: &str = "save-result";
    pub const MEMBERS: &str = "members";
    pub const MEMBER_DETAIL: &str = "member-detail";
}

/// The result of one controller invocation: a logical view name plus the
/// model the view renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelView {
    pub view_name: String,
    #[serde(default)]
    pub model: Model,
}

impl ModelView {
    pub fn new(view_name: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            model: Model::new(),
        }
    }

    pub fn insert<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        self.model.insert(key.into(), serde_json::to_value(value)?);
        Ok(())
    }

    pub fn with<T: Serialize + ?Sized>(
        mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        self.insert(key, value)?;
        Ok(self)
    }
}
