use std::sync::Arc;

use chrono::Utc;

use renoovy_content::{Benefit, BenefitId, NewBenefit};
use renoovy_core::Entity;
use renoovy_infra::{BenefitRepository, Repository};

use crate::dto::{BenefitResponse, CreateBenefit, GetBenefits, UpdateBenefit};
use crate::error::{UseCaseError, UseCaseResult};

#[derive(Clone)]
pub struct BenefitUseCases {
    repo: Arc<dyn BenefitRepository>,
}

impl BenefitUseCases {
    pub fn new(repo: Arc<dyn BenefitRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, req: GetBenefits) -> UseCaseResult<Vec<BenefitResponse>> {
        let mut benefits = if req.include_inactive {
            self.repo.find_all().await?
        } else {
            self.repo.find_active().await?
        };
        benefits.sort_by_key(Benefit::order);
        Ok(benefits.iter().map(BenefitResponse::from).collect())
    }

    pub async fn create(&self, req: CreateBenefit) -> UseCaseResult<BenefitResponse> {
        let benefit = Benefit::new(NewBenefit::new(
            BenefitId::generate(),
            req.title,
            req.description,
            req.icon,
            req.order,
            Utc::now(),
        ))?;

        let benefit = self.repo.save(benefit).await?;
        tracing::info!(id = %benefit.id(), "benefit created");
        Ok(BenefitResponse::from(&benefit))
    }

    pub async fn update(&self, req: UpdateBenefit) -> UseCaseResult<BenefitResponse> {
        let id = BenefitId::parse(req.id)?;
        let mut benefit = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| UseCaseError::not_found::<Benefit>(&id))?;

        let now = Utc::now();
        if req.title.is_some() || req.description.is_some() {
            let title = req.title.unwrap_or_else(|| benefit.title().to_string());
            let description = req
                .description
                .unwrap_or_else(|| benefit.description().to_string());
            benefit = benefit.update_content(title, description, now)?;
        }
        if let Some(icon) = req.icon {
            benefit = benefit.change_icon(icon, now)?;
        }
        if let Some(order) = req.order {
            benefit = benefit.change_order(order, now);
        }

        let benefit = self.repo.update(benefit).await?;
        tracing::info!(id = %benefit.id(), "benefit updated");
        Ok(BenefitResponse::from(&benefit))
    }
}
