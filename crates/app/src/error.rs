use thiserror::Error;

use renoovy_core::{DomainError, Entity};
use renoovy_infra::RepositoryError;

pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Failure of an application use case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
}

impl UseCaseError {
    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        Self::NotFound {
            entity: E::KIND,
            id: id.to_string(),
        }
    }

    /// Whether the failure means the addressed entity does not exist, whichever
    /// layer noticed it.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Repository(RepositoryError::NotFound { .. })
                | Self::Domain(DomainError::NotFound)
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_validation())
    }
}
