use std::{collections::HashMap, fmt};

use maud::Markup;
use serde::de::DeserializeOwned;
use shared::protocol::{views, Model};
use tracing::debug;

use crate::{error::DispatchError, templates};

pub const DEFAULT_VIEW_PREFIX: &str = "views/";
pub const DEFAULT_VIEW_SUFFIX: &str = ".html";

/// A resolved view, addressed by its physical template path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub path: String,
}

/// Maps logical view names to template paths as `prefix + name + suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResolver {
    prefix: String,
    suffix: String,
}

impl ViewResolver {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn resolve(&self, view_name: &str) -> View {
        View {
            path: format!("{}{}{}", self.prefix, view_name, self.suffix),
        }
    }
}

impl Default for ViewResolver {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_PREFIX, DEFAULT_VIEW_SUFFIX)
    }
}

pub trait ViewRenderer: Send + Sync {
    /// Forwards `model` to the template behind `view` and returns the page.
    fn render(&self, view: &View, model: &Model) -> Result<String, DispatchError>;
}

pub type Template = fn(&Model) -> Result<Markup, DispatchError>;

/// Templates keyed by physical path.
#[derive(Clone, Default)]
pub struct TemplateSet {
    templates: HashMap<String, Template>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The member pages, registered wherever `resolver` places them.
    pub fn members(resolver: &ViewResolver) -> Self {
        let mut set = Self::new();
        set.register(resolver.resolve(views::NEW_FORM), templates::new_form);
        set.register(resolver.resolve(views::SAVE_RESULT), templates::save_result);
        set.register(resolver.resolve(views::MEMBERS), templates::members);
        set.register(
            resolver.resolve(views::MEMBER_DETAIL),
            templates::member_detail,
        );
        set
    }

    pub fn register(&mut self, view: View, template: Template) {
        self.templates.insert(view.path, template);
    }

    pub fn contains(&self, view: &View) -> bool {
        self.templates.contains_key(&view.path)
    }
}

impl fmt::Debug for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<_> = self.templates.keys().collect();
        paths.sort();
        f.debug_struct("TemplateSet").field("paths", &paths).finish()
    }
}

impl ViewRenderer for TemplateSet {
    fn render(&self, view: &View, model: &Model) -> Result<String, DispatchError> {
        let template = self
            .templates
            .get(&view.path)
            .ok_or_else(|| DispatchError::MissingTemplate(view.path.clone()))?;
        debug!(path = %view.path, attributes = model.len(), "forwarding to template");
        Ok(template(model)?.into_string())
    }
}

/// Reads a named model attribute as `T`.
pub fn attribute<T: DeserializeOwned>(model: &Model, key: &str) -> Result<T, DispatchError> {
    let value = model
        .get(key)
        .ok_or_else(|| DispatchError::model_attribute(key, "missing"))?;
    serde_json::from_value(value.clone()).map_err(|e| DispatchError::model_attribute(key, e))
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
