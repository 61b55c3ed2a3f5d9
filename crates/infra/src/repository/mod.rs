//! Entity repositories.
//!
//! The application layer depends only on the traits in [`r#trait`]; the
//! in-memory adapter stands in for a future network-backed store.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use r#trait::{
    BenefitRepository, FaqRepository, PackageRepository, Repository, RepositoryError,
    TestimonialRepository,
};
