use shared::{
    domain::MemberId,
    error::{ApiError, ErrorCode},
};
use storage::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no controller registered for {0}")]
    NotFound(String),
    #[error("a controller is already registered for {0}")]
    DuplicateRoute(String),
    #[error("invalid `{field}` parameter: {reason}")]
    MalformedInput { field: String, reason: String },
    #[error("member {0} not found")]
    NoSuchMember(MemberId),
    #[error("no template registered at {0}")]
    MissingTemplate(String),
    #[error("model attribute `{key}`: {reason}")]
    ModelAttribute { key: String, reason: String },
    #[error(transparent)]
    Store(StoreError),
}

impl DispatchError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn model_attribute(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::ModelAttribute {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) | Self::NoSuchMember(_) => ErrorCode::NotFound,
            Self::MalformedInput { .. }
            | Self::DuplicateRoute(_)
            | Self::MissingTemplate(_)
            | Self::ModelAttribute { .. }
            | Self::Store(_) => ErrorCode::Internal,
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        ApiError::new(self.code(), self.to_string())
    }
}

impl From<StoreError> for DispatchError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NoSuchMember(id),
            other => Self::Store(other),
        }
    }
}
