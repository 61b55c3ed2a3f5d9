use std::sync::Arc;

use chrono::Utc;

use renoovy_content::{Faq, FaqId, NewFaq};
use renoovy_core::Entity;
use renoovy_infra::{FaqRepository, Repository};

use crate::dto::{CreateFaq, FaqResponse, GetFaqs, UpdateFaq};
use crate::error::{UseCaseError, UseCaseResult};

#[derive(Clone)]
pub struct FaqUseCases {
    repo: Arc<dyn FaqRepository>,
}

impl FaqUseCases {
    pub fn new(repo: Arc<dyn FaqRepository>) -> Self {
        Self { repo }
    }

    /// FAQs in display order. Equal orders keep insertion order.
    pub async fn list(&self, req: GetFaqs) -> UseCaseResult<Vec<FaqResponse>> {
        let mut faqs = match (req.category.as_deref(), req.include_inactive) {
            (Some(category), false) => self.repo.find_by_category(category).await?,
            (None, false) => self.repo.find_active().await?,
            (category, true) => {
                let mut all = self.repo.find_all().await?;
                if let Some(category) = category {
                    all.retain(|f| f.category() == Some(category));
                }
                all
            }
        };
        faqs.sort_by_key(Faq::order);
        Ok(faqs.iter().map(FaqResponse::from).collect())
    }

    pub async fn create(&self, req: CreateFaq) -> UseCaseResult<FaqResponse> {
        let mut data = NewFaq::new(
            FaqId::generate(),
            req.question,
            req.answer,
            req.order,
            Utc::now(),
        );
        data.category = req.category;

        let faq = self.repo.save(Faq::new(data)?).await?;
        tracing::info!(id = %faq.id(), "faq created");
        Ok(FaqResponse::from(&faq))
    }

    pub async fn update(&self, req: UpdateFaq) -> UseCaseResult<FaqResponse> {
        let id = FaqId::parse(req.id)?;
        let mut faq = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| UseCaseError::not_found::<Faq>(&id))?;

        let now = Utc::now();
        if let Some(question) = req.question {
            faq = faq.update_question(question, now)?;
        }
        if let Some(answer) = req.answer {
            faq = faq.update_answer(answer, now)?;
        }
        if let Some(order) = req.order {
            faq = faq.change_order(order, now);
        }
        if let Some(category) = req.category {
            faq = faq.change_category(category, now);
        }

        let faq = self.repo.update(faq).await?;
        tracing::info!(id = %faq.id(), "faq updated");
        Ok(FaqResponse::from(&faq))
    }
}
