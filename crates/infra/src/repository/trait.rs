use thiserror::Error;

use renoovy_catalog::Package;
use renoovy_content::{Benefit, Faq};
use renoovy_core::{Entity, Rating};
use renoovy_reviews::Testimonial;

/// Repository operation error.
///
/// These are **storage errors** (lookups, uniqueness, lock health) as opposed to
/// domain errors (validation, currency rules).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} '{id}' already exists")]
    Duplicate { entity: &'static str, id: String },

    #[error("repository lock poisoned")]
    Poisoned,
}

impl RepositoryError {
    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        Self::NotFound {
            entity: E::KIND,
            id: id.to_string(),
        }
    }

    pub fn duplicate<E: Entity>(id: &E::Id) -> Self {
        Self::Duplicate {
            entity: E::KIND,
            id: id.to_string(),
        }
    }
}

/// Read/write store for one entity kind.
///
/// ## Semantics
///
/// - Collections keep insertion order; `find_all` and `find_active` return it.
/// - `save` inserts and fails with `Duplicate` when the id is taken.
/// - `update` replaces the stored entity with the same id and fails with
///   `NotFound` when there is none.
/// - `delete` removes by id and fails with `NotFound` when there is none.
///
/// Entities are values: callers get copies, never references into the store.
#[async_trait::async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Send + Sync + 'static,
    E::Id: Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<E>, RepositoryError>;

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, RepositoryError>;

    async fn find_active(&self) -> Result<Vec<E>, RepositoryError>;

    async fn save(&self, entity: E) -> Result<E, RepositoryError>;

    async fn update(&self, entity: E) -> Result<E, RepositoryError>;

    async fn delete(&self, id: &E::Id) -> Result<(), RepositoryError>;
}

/// Package store.
pub trait PackageRepository: Repository<Package> {}

impl<T> PackageRepository for T where T: Repository<Package> + ?Sized {}

/// Testimonial store.
#[async_trait::async_trait]
pub trait TestimonialRepository: Repository<Testimonial> {
    /// Active testimonials rated at least `min_rating`.
    async fn find_by_rating(
        &self,
        min_rating: Rating,
    ) -> Result<Vec<Testimonial>, RepositoryError>;
}

/// FAQ store.
#[async_trait::async_trait]
pub trait FaqRepository: Repository<Faq> {
    /// Active FAQs in `category`.
    async fn find_by_category(&self, category: &str) -> Result<Vec<Faq>, RepositoryError>;
}

/// Benefit store.
pub trait BenefitRepository: Repository<Benefit> {}

impl<T> BenefitRepository for T where T: Repository<Benefit> + ?Sized {}
