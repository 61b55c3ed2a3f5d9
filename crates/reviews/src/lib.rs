//! Reviews domain module: customer testimonials and their ranking.
//!
//! Pure domain logic (no IO, no storage).

pub mod ranking;
pub mod testimonial;

pub use ranking::{DEFAULT_FEATURED_LIMIT, average_rating, featured_testimonials, total_reviews};
pub use testimonial::{NewTestimonial, Testimonial, TestimonialId};
