//! Content domain module: FAQs, product benefits, and input hygiene rules for
//! user-provided text.
//!
//! Pure domain logic (no IO, no storage).

pub mod benefit;
pub mod faq;
pub mod validation;

pub use benefit::{Benefit, BenefitId, NewBenefit};
pub use faq::{Faq, FaqId, NewFaq};
pub use validation::{is_valid_email, is_valid_phone_number, sanitize_html};
