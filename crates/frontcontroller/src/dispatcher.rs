use std::{collections::HashMap, fmt, sync::Arc};

use shared::protocol::{ModelView, ParamMap};
use storage::MemberStore;
use tracing::debug;

use crate::{
    adapter::Handler,
    controller::{
        MemberDetailController, MemberFormController, MemberListController, MemberSaveController,
    },
    error::DispatchError,
    member_detail_route, members_route, new_form_route, save_route,
    view::{TemplateSet, ViewRenderer, ViewResolver},
};

/// A page produced by the front controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub view_path: String,
    pub body: String,
}

/// Collects handlers before the registry is frozen into a [`FrontController`].
pub struct FrontControllerBuilder {
    handlers: HashMap<String, Handler>,
    resolver: ViewResolver,
    renderer: Arc<dyn ViewRenderer>,
}

impl FrontControllerBuilder {
    pub fn new(resolver: ViewResolver, renderer: impl ViewRenderer + 'static) -> Self {
        Self {
            handlers: HashMap::new(),
            resolver,
            renderer: Arc::new(renderer),
        }
    }

    pub fn register(
        &mut self,
        path: impl Into<String>,
        handler: Handler,
    ) -> Result<&mut Self, DispatchError> {
        let path = path.into();
        if self.handlers.contains_key(&path) {
            return Err(DispatchError::DuplicateRoute(path));
        }
        self.handlers.insert(path, handler);
        Ok(self)
    }

    pub fn build(self) -> FrontController {
        FrontController {
            handlers: self.handlers,
            resolver: self.resolver,
            renderer: self.renderer,
        }
    }
}

impl fmt::Debug for FrontControllerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrontControllerBuilder")
            .field("handlers", &self.handlers)
            .field("resolver", &self.resolver)
            .finish()
    }
}

/// Single entry point for every request. The registry is fixed once built.
pub struct FrontController {
    handlers: HashMap<String, Handler>,
    resolver: ViewResolver,
    renderer: Arc<dyn ViewRenderer>,
}

impl FrontController {
    pub fn builder(
        resolver: ViewResolver,
        renderer: impl ViewRenderer + 'static,
    ) -> FrontControllerBuilder {
        FrontControllerBuilder::new(resolver, renderer)
    }

    /// The member pages wired to `store`, rendered with the built-in templates.
    pub fn for_members(store: MemberStore, resolver: ViewResolver) -> Result<Self, DispatchError> {
        let templates = TemplateSet::members(&resolver);
        let mut builder = Self::builder(resolver, templates);
        builder
            .register(new_form_route(), Handler::model_view(MemberFormController))?
            .register(
                save_route(),
                Handler::model_view(MemberSaveController::new(store.clone())),
            )?
            .register(
                members_route(),
                Handler::model_view(MemberListController::new(store.clone())),
            )?
            .register(
                member_detail_route(),
                Handler::view_name(MemberDetailController::new(store)),
            )?;
        Ok(builder.build())
    }

    pub fn lookup(&self, path: &str) -> Option<&Handler> {
        self.handlers.get(path)
    }

    pub fn routes(&self) -> Vec<&str> {
        let mut routes: Vec<_> = self.handlers.keys().map(String::as_str).collect();
        routes.sort_unstable();
        routes
    }

    pub fn dispatch(&self, path: &str, params: &ParamMap) -> Result<ModelView, DispatchError> {
        let Some(handler) = self.lookup(path) else {
            debug!(%path, "no controller mapped");
            return Err(DispatchError::NotFound(path.to_string()));
        };
        let model_view = handler.handle(params)?;
        debug!(%path, view = %model_view.view_name, "dispatched");
        Ok(model_view)
    }

    pub fn serve(&self, path: &str, params: &ParamMap) -> Result<Rendered, DispatchError> {
        let model_view = self.dispatch(path, params)?;
        let view = self.resolver.resolve(&model_view.view_name);
        let body = self.renderer.render(&view, &model_view.model)?;
        Ok(Rendered {
            view_path: view.path,
            body,
        })
    }
}

impl fmt::Debug for FrontController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrontController")
            .field("routes", &self.routes())
            .field("resolver", &self.resolver)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
