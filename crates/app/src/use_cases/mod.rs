//! Use cases, one service per context. Each service talks to storage only
//! through its repository trait.

pub mod benefits;
pub mod faqs;
pub mod packages;
pub mod testimonials;

pub use benefits::BenefitUseCases;
pub use faqs::FaqUseCases;
pub use packages::PackageUseCases;
pub use testimonials::TestimonialUseCases;
