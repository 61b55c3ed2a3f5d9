use std::sync::Arc;

use chrono::Utc;

use renoovy_core::DomainResult;
use renoovy_infra::seed::{SeededRepositories, seeded_repositories};
use renoovy_infra::{BenefitRepository, FaqRepository, PackageRepository, TestimonialRepository};

use crate::config::AppConfig;
use crate::dto::{GetBenefits, GetFaqs, GetPackages, LandingPage};
use crate::error::UseCaseResult;
use crate::use_cases::{BenefitUseCases, FaqUseCases, PackageUseCases, TestimonialUseCases};

/// Wires repositories into the use-case services.
///
/// Built once at the entry point and passed (or cloned) to whatever needs it.
#[derive(Clone)]
pub struct AppContainer {
    config: AppConfig,
    pub packages: PackageUseCases,
    pub testimonials: TestimonialUseCases,
    pub faqs: FaqUseCases,
    pub benefits: BenefitUseCases,
}

impl AppContainer {
    pub fn new(
        config: AppConfig,
        packages: Arc<dyn PackageRepository>,
        testimonials: Arc<dyn TestimonialRepository>,
        faqs: Arc<dyn FaqRepository>,
        benefits: Arc<dyn BenefitRepository>,
    ) -> Self {
        Self {
            config,
            packages: PackageUseCases::new(packages, config),
            testimonials: TestimonialUseCases::new(testimonials, config),
            faqs: FaqUseCases::new(faqs),
            benefits: BenefitUseCases::new(benefits),
        }
    }

    /// Container over in-memory repositories holding the default storefront
    /// content.
    pub fn in_memory(config: AppConfig) -> DomainResult<Self> {
        let SeededRepositories {
            packages,
            testimonials,
            faqs,
            benefits,
        } = seeded_repositories(Utc::now())?;

        Ok(Self::new(
            config,
            Arc::new(packages),
            Arc::new(testimonials),
            Arc::new(faqs),
            Arc::new(benefits),
        ))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Everything the landing page renders, from active content only.
    pub async fn landing_page(&self) -> UseCaseResult<LandingPage> {
        Ok(LandingPage {
            packages: self.packages.list(GetPackages::default()).await?,
            recommended_package: self.packages.recommended().await?,
            best_offer: self.packages.best_offer().await?,
            featured_testimonials: self.testimonials.featured().await?,
            stats: self.testimonials.stats().await?,
            faqs: self.faqs.list(GetFaqs::default()).await?,
            benefits: self.benefits.list(GetBenefits::default()).await?,
        })
    }
}
