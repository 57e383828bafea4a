use std::{fmt, sync::Arc};

use shared::protocol::{Model, ModelView, ParamMap};

use crate::{controller::Controller, error::DispatchError};

/// A controller that fills a model owned by the dispatcher and returns only
/// the view name.
pub trait ModelController: Send + Sync {
    fn process(&self, params: &ParamMap, model: &mut Model) -> Result<String, DispatchError>;
}

/// A registered request handler. The dispatcher only deals in `Handler`s,
/// so both controller styles can sit in the same registry.
#[derive(Clone)]
pub enum Handler {
    ModelView(Arc<dyn Controller>),
    ViewName(Arc<dyn ModelController>),
}

impl Handler {
    pub fn model_view(controller: impl Controller + 'static) -> Self {
        Self::ModelView(Arc::new(controller))
    }

    pub fn view_name(controller: impl ModelController + 'static) -> Self {
        Self::ViewName(Arc::new(controller))
    }

    pub fn handle(&self, params: &ParamMap) -> Result<ModelView, DispatchError> {
        match self {
            Self::ModelView(controller) => controller.process(params),
            Self::ViewName(controller) => {
                let mut model = Model::new();
                let view_name = controller.process(params, &mut model)?;
                Ok(ModelView { view_name, model })
            }
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelView(_) => f.write_str("Handler::ModelView"),
            Self::ViewName(_) => f.write_str("Handler::ViewName"),
        }
    }
}
