//! Infrastructure layer: storage adapters behind the repository contract, and
//! the storefront's seed content.

pub mod repository;
pub mod seed;

pub use repository::{
    BenefitRepository, FaqRepository, InMemoryRepository, PackageRepository, Repository,
    RepositoryError, TestimonialRepository,
};
pub use seed::{SeededRepositories, seeded_repositories};
