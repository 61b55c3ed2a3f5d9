use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use renoovy_content::Faq;
use renoovy_core::{Entity, Rating};
use renoovy_reviews::Testimonial;

use super::r#trait::{FaqRepository, Repository, RepositoryError, TestimonialRepository};

/// In-memory, insertion-ordered entity store.
///
/// Intended for tests/dev and for serving the seeded storefront. Lookups are
/// linear scans; collections hold a handful of records.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    items: RwLock<Vec<E>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Store pre-populated with `items`, in order.
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<E>>, RepositoryError> {
        self.items.read().map_err(|_| RepositoryError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<E>>, RepositoryError> {
        self.items.write().map_err(|_| RepositoryError::Poisoned)
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryRepository<E>
where
    E: Entity + Clone,
{
    fn select(&self, keep: impl Fn(&E) -> bool) -> Result<Vec<E>, RepositoryError> {
        Ok(self.read()?.iter().filter(|e| keep(e)).cloned().collect())
    }

    fn get(&self, id: &E::Id) -> Result<Option<E>, RepositoryError> {
        Ok(self.read()?.iter().find(|e| e.id() == id).cloned())
    }

    fn insert(&self, entity: E) -> Result<E, RepositoryError> {
        let mut items = self.write()?;
        if items.iter().any(|e| e.id() == entity.id()) {
            return Err(RepositoryError::duplicate::<E>(entity.id()));
        }
        items.push(entity.clone());
        tracing::debug!(entity = E::KIND, id = %entity.id(), "saved");
        Ok(entity)
    }

    fn replace(&self, entity: E) -> Result<E, RepositoryError> {
        let mut items = self.write()?;
        let slot = items
            .iter_mut()
            .find(|e| e.id() == entity.id())
            .ok_or_else(|| RepositoryError::not_found::<E>(entity.id()))?;
        *slot = entity.clone();
        tracing::debug!(entity = E::KIND, id = %entity.id(), "updated");
        Ok(entity)
    }

    fn remove(&self, id: &E::Id) -> Result<(), RepositoryError> {
        let mut items = self.write()?;
        let index = items
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| RepositoryError::not_found::<E>(id))?;
        items.remove(index);
        tracing::debug!(entity = E::KIND, %id, "deleted");
        Ok(())
    }
}

// Locks are taken and released inside the sync helpers above, never across an
// await point.
#[async_trait::async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync + 'static,
    E::Id: Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        self.select(|_| true)
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, RepositoryError> {
        self.get(id)
    }

    async fn find_active(&self) -> Result<Vec<E>, RepositoryError> {
        self.select(|e| e.is_active())
    }

    async fn save(&self, entity: E) -> Result<E, RepositoryError> {
        self.insert(entity)
    }

    async fn update(&self, entity: E) -> Result<E, RepositoryError> {
        self.replace(entity)
    }

    async fn delete(&self, id: &E::Id) -> Result<(), RepositoryError> {
        self.remove(id)
    }
}

#[async_trait::async_trait]
impl TestimonialRepository for InMemoryRepository<Testimonial> {
    async fn find_by_rating(
        &self,
        min_rating: Rating,
    ) -> Result<Vec<Testimonial>, RepositoryError> {
        self.select(|t| t.is_active() && t.rating() >= min_rating)
    }
}

#[async_trait::async_trait]
impl FaqRepository for InMemoryRepository<Faq> {
    async fn find_by_category(&self, category: &str) -> Result<Vec<Faq>, RepositoryError> {
        self.select(|f| f.is_active() && f.category() == Some(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use renoovy_content::{Benefit, BenefitId, FaqId, NewBenefit, NewFaq};
    use renoovy_reviews::{NewTestimonial, TestimonialId};

    use crate::repository::BenefitRepository;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    fn benefit(id: &str, order: u32) -> Benefit {
        Benefit::new(NewBenefit::new(
            BenefitId::parse(id).unwrap(),
            "Unhas Saudáveis",
            "Fortalece suas unhas, deixando-as menos quebradiças.",
            "💅",
            order,
            test_time(),
        ))
        .unwrap()
    }

    fn testimonial(id: &str, rating: i64) -> Testimonial {
        Testimonial::new(NewTestimonial::new(
            TestimonialId::parse(id).unwrap(),
            "Beatriz Santos",
            "Muito bom, comprei a opção com 3 potes!",
            Rating::new(rating).unwrap(),
            test_time(),
        ))
        .unwrap()
    }

    fn faq(id: &str, category: Option<&str>) -> Faq {
        let mut data = NewFaq::new(
            FaqId::parse(id).unwrap(),
            "É aprovado pela ANVISA?",
            "Sim! Produto registrado e aprovado pela ANVISA.",
            1,
            test_time(),
        );
        data.category = category.map(str::to_string);
        Faq::new(data).unwrap()
    }

    #[tokio::test]
    async fn save_then_find_preserves_insertion_order() {
        let repo = InMemoryRepository::new();
        repo.save(benefit("benefit_b", 2)).await.unwrap();
        repo.save(benefit("benefit_a", 1)).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let ids: Vec<String> = all.iter().map(|b| b.id().to_string()).collect();
        assert_eq!(ids, vec!["benefit_b", "benefit_a"]);

        let found = repo
            .find_by_id(&BenefitId::parse("benefit_a").unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(benefit("benefit_a", 1)));
    }

    #[tokio::test]
    async fn save_rejects_duplicate_ids() {
        let repo = InMemoryRepository::with_items(vec![benefit("benefit_1", 1)]);

        let err = repo.save(benefit("benefit_1", 9)).await.unwrap_err();
        assert_eq!(
            err,
            RepositoryError::Duplicate {
                entity: "benefit",
                id: "benefit_1".into(),
            }
        );
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let repo =
            InMemoryRepository::with_items(vec![benefit("benefit_1", 1), benefit("benefit_2", 2)]);

        let moved = benefit("benefit_1", 1).change_order(5, test_time());
        repo.update(moved.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0], moved);
        assert_eq!(all[1].order(), 2);
    }

    #[tokio::test]
    async fn update_and_delete_fail_for_unknown_ids() {
        let repo: InMemoryRepository<Benefit> = InMemoryRepository::new();

        let err = repo.update(benefit("benefit_x", 1)).await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::NotFound {
                entity: "benefit",
                ..
            }
        ));

        let err = repo
            .delete(&BenefitId::parse("benefit_x").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "benefit 'benefit_x' not found");
    }

    #[tokio::test]
    async fn delete_removes_entity() {
        let repo = InMemoryRepository::with_items(vec![benefit("benefit_1", 1)]);
        let id = BenefitId::parse("benefit_1").unwrap();

        repo.delete(&id).await.unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_active_skips_inactive() {
        let repo = InMemoryRepository::with_items(vec![
            benefit("benefit_1", 1).deactivate(test_time()),
            benefit("benefit_2", 2),
        ]);

        let active = repo.find_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id().to_string(), "benefit_2");
    }

    #[tokio::test]
    async fn find_by_rating_filters_active_and_threshold() {
        let repo = InMemoryRepository::with_items(vec![
            testimonial("test_1", 5),
            testimonial("test_2", 3),
            testimonial("test_3", 4).deactivate(),
            testimonial("test_4", 4),
        ]);

        let found = repo.find_by_rating(Rating::new(4).unwrap()).await.unwrap();
        let ids: Vec<String> = found.iter().map(|t| t.id().to_string()).collect();
        assert_eq!(ids, vec!["test_1", "test_4"]);
    }

    #[tokio::test]
    async fn find_by_category_filters_active_and_category() {
        let repo = InMemoryRepository::with_items(vec![
            faq("faq_1", Some("uso")),
            faq("faq_2", Some("produto")),
            faq("faq_3", Some("uso")).deactivate(test_time()),
            faq("faq_4", None),
        ]);

        let found = repo.find_by_category("uso").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id().to_string(), "faq_1");
    }

    #[tokio::test]
    async fn works_behind_trait_objects() {
        let items = vec![benefit("benefit_1", 1)];
        let repo: std::sync::Arc<dyn BenefitRepository> =
            std::sync::Arc::new(InMemoryRepository::with_items(items));
        assert_eq!(repo.find_active().await.unwrap().len(), 1);
    }
}
