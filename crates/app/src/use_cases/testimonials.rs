use std::sync::Arc;

use chrono::Utc;

use renoovy_content::sanitize_html;
use renoovy_core::{Entity, Rating};
use renoovy_infra::{Repository, TestimonialRepository};
use renoovy_reviews::{
    NewTestimonial, Testimonial, TestimonialId, average_rating, featured_testimonials,
    total_reviews,
};

use crate::config::AppConfig;
use crate::dto::{CreateTestimonial, GetTestimonials, TestimonialResponse, TestimonialStats};
use crate::error::UseCaseResult;

#[derive(Clone)]
pub struct TestimonialUseCases {
    repo: Arc<dyn TestimonialRepository>,
    config: AppConfig,
}

impl TestimonialUseCases {
    pub fn new(repo: Arc<dyn TestimonialRepository>, config: AppConfig) -> Self {
        Self { repo, config }
    }

    /// Active testimonials, optionally filtered by minimum rating.
    ///
    /// With `only_featured` the featured ranking applies and `limit` defaults
    /// to the configured featured limit; otherwise `limit` just truncates.
    pub async fn list(&self, req: GetTestimonials) -> UseCaseResult<Vec<TestimonialResponse>> {
        let testimonials = match req.min_rating {
            Some(min) => self.repo.find_by_rating(Rating::new(min)?).await?,
            None => self.repo.find_active().await?,
        };

        if req.only_featured {
            let limit = req.limit.unwrap_or(self.config.featured_limit);
            return Ok(featured_testimonials(&testimonials, limit)
                .into_iter()
                .map(TestimonialResponse::from)
                .collect());
        }

        let limit = req.limit.unwrap_or(testimonials.len());
        Ok(testimonials
            .iter()
            .take(limit)
            .map(TestimonialResponse::from)
            .collect())
    }

    pub async fn featured(&self) -> UseCaseResult<Vec<TestimonialResponse>> {
        self.list(GetTestimonials {
            only_featured: true,
            ..GetTestimonials::default()
        })
        .await
    }

    pub async fn stats(&self) -> UseCaseResult<TestimonialStats> {
        let testimonials = self.repo.find_all().await?;
        Ok(TestimonialStats {
            average_rating: average_rating(&testimonials),
            total_reviews: total_reviews(&testimonials),
        })
    }

    /// Record a new, unverified testimonial. Markup is stripped from the name
    /// and text before validation.
    pub async fn create(&self, req: CreateTestimonial) -> UseCaseResult<TestimonialResponse> {
        let testimonial = Testimonial::new(NewTestimonial::new(
            TestimonialId::generate(),
            sanitize_html(&req.name),
            sanitize_html(&req.text),
            Rating::new(req.rating)?,
            Utc::now(),
        ))?;

        let testimonial = self.repo.save(testimonial).await?;
        tracing::info!(
            id = %testimonial.id(),
            rating = testimonial.rating().value(),
            "testimonial created"
        );
        Ok(TestimonialResponse::from(&testimonial))
    }
}
