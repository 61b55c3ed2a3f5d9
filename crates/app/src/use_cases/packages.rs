use std::sync::Arc;

use chrono::Utc;

use renoovy_catalog::{NewPackage, Package, PackageId, best_offer, recommended_package};
use renoovy_core::{Entity, Money};
use renoovy_infra::{PackageRepository, Repository};

use crate::config::AppConfig;
use crate::dto::{CreatePackage, GetPackages, PackageResponse, UpdatePackage};
use crate::error::{UseCaseError, UseCaseResult};

/// Package listing, selection and administration.
#[derive(Clone)]
pub struct PackageUseCases {
    repo: Arc<dyn PackageRepository>,
    config: AppConfig,
}

impl PackageUseCases {
    pub fn new(repo: Arc<dyn PackageRepository>, config: AppConfig) -> Self {
        Self { repo, config }
    }

    /// Packages ordered by quantity, smallest bundle first.
    pub async fn list(&self, req: GetPackages) -> UseCaseResult<Vec<PackageResponse>> {
        let mut packages = if req.include_inactive {
            self.repo.find_all().await?
        } else {
            self.repo.find_active().await?
        };
        packages.sort_by_key(Package::quantity);
        Ok(packages.iter().map(PackageResponse::from).collect())
    }

    pub async fn recommended(&self) -> UseCaseResult<Option<PackageResponse>> {
        let packages = self.repo.find_all().await?;
        Ok(recommended_package(&packages).map(PackageResponse::from))
    }

    pub async fn best_offer(&self) -> UseCaseResult<Option<PackageResponse>> {
        let packages = self.repo.find_all().await?;
        Ok(best_offer(&packages).map(PackageResponse::from))
    }

    pub async fn create(&self, req: CreatePackage) -> UseCaseResult<PackageResponse> {
        let mut data = NewPackage::new(
            PackageId::generate(),
            req.quantity,
            req.title,
            Money::new(req.original_price, self.config.currency)?,
            req.discount,
            Utc::now(),
        );
        data.installment_count = req
            .installment_count
            .unwrap_or(self.config.default_installments);
        data.popular = req.popular;

        let package = self.repo.save(Package::new(data)?).await?;
        tracing::info!(id = %package.id(), quantity = package.quantity(), "package created");
        Ok(PackageResponse::from(&package))
    }

    pub async fn update(&self, req: UpdatePackage) -> UseCaseResult<PackageResponse> {
        let id = PackageId::parse(req.id)?;
        let mut package = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| UseCaseError::not_found::<Package>(&id))?;

        let now = Utc::now();
        if let Some(title) = req.title {
            package = package.rename(title, now)?;
        }
        if let Some(amount) = req.original_price {
            let price = Money::new(amount, package.original_price().currency())?;
            package = package.update_price(price, now)?;
        }
        if let Some(discount) = req.discount {
            package = package.change_discount(discount, now)?;
        }
        if let Some(count) = req.installment_count {
            package = package.change_installments(count, now)?;
        }
        if let Some(popular) = req.popular {
            package = package.mark_popular(popular, now);
        }

        let package = self.repo.update(package).await?;
        tracing::info!(id = %package.id(), "package updated");
        Ok(PackageResponse::from(&package))
    }

    pub async fn delete(&self, id: &str) -> UseCaseResult<()> {
        let id = PackageId::parse(id)?;
        self.repo.delete(&id).await?;
        tracing::info!(%id, "package deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};
    use renoovy_core::{Currency, DomainError};
    use renoovy_infra::{InMemoryRepository, seed};
    use rust_decimal::Decimal;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn use_cases(config: AppConfig) -> (Arc<InMemoryRepository<Package>>, PackageUseCases) {
        let items = seed::packages(test_time()).unwrap();
        let repo = Arc::new(InMemoryRepository::with_items(items));
        (repo.clone(), PackageUseCases::new(repo, config))
    }

    fn ids(packages: &[PackageResponse]) -> Vec<&str> {
        packages.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn list_sorts_by_quantity_and_hides_inactive() {
        let (repo, packages) = use_cases(AppConfig::default());
        let pkg_1 = repo
            .find_by_id(&PackageId::parse("pkg_1").unwrap())
            .await
            .unwrap()
            .unwrap();
        repo.update(pkg_1.deactivate(test_time())).await.unwrap();

        let active = packages.list(GetPackages::default()).await.unwrap();
        assert_eq!(ids(&active), vec!["pkg_3", "pkg_5"]);

        let all = packages
            .list(GetPackages {
                include_inactive: true,
            })
            .await
            .unwrap();
        assert_eq!(ids(&all), vec!["pkg_1", "pkg_3", "pkg_5"]);
    }

    #[tokio::test]
    async fn selects_recommended_and_best_offer() {
        let (_, packages) = use_cases(AppConfig::default());

        assert_eq!(packages.recommended().await.unwrap().unwrap().id, "pkg_3");
        assert_eq!(packages.best_offer().await.unwrap().unwrap().id, "pkg_5");
    }

    #[tokio::test]
    async fn selection_is_empty_without_packages() {
        let packages = PackageUseCases::new(
            Arc::new(InMemoryRepository::<Package>::new()),
            AppConfig::default(),
        );

        assert_eq!(packages.recommended().await.unwrap(), None);
        assert_eq!(packages.best_offer().await.unwrap(), None);
    }

    #[tokio::test]
    async fn create_uses_configured_currency_and_installments() {
        let config = AppConfig {
            currency: Currency::Usd,
            default_installments: 6,
            ..AppConfig::default()
        };
        let (repo, packages) = use_cases(config);

        let created = packages
            .create(CreatePackage {
                quantity: 2,
                title: "Dupla".into(),
                original_price: Decimal::from(400),
                discount: Decimal::from(40),
                installment_count: None,
                popular: false,
            })
            .await
            .unwrap();

        assert!(created.id.starts_with("pkg_"));
        assert_eq!(created.installment_count, 6);
        assert_eq!(created.final_price.currency, Currency::Usd);
        assert_eq!(created.final_price.amount, Decimal::from(240));
        assert_eq!(repo.find_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let (repo, packages) = use_cases(AppConfig::default());

        let err = packages
            .create(CreatePackage {
                quantity: 0,
                title: "Nada".into(),
                original_price: Decimal::from(100),
                discount: Decimal::ZERO,
                installment_count: None,
                popular: false,
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            UseCaseError::Domain(DomainError::validation(
                "quantity must be a positive integer"
            ))
        );
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_applies_partial_changes() {
        let (_, packages) = use_cases(AppConfig::default());

        let updated = packages
            .update(UpdatePackage {
                id: "pkg_1".into(),
                discount: Some(Decimal::from(50)),
                popular: Some(true),
                ..UpdatePackage::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.title, "Experimente e Apaixone-se");
        assert_eq!(updated.final_price.formatted, "R$ 148,50");
        assert!(updated.popular);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_package_fail() {
        let (_, packages) = use_cases(AppConfig::default());

        let err = packages
            .update(UpdatePackage {
                id: "pkg_missing".into(),
                ..UpdatePackage::default()
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            UseCaseError::NotFound {
                entity: "package",
                id: "pkg_missing".into(),
            }
        );

        let err = packages.delete("pkg_missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_package() {
        let (repo, packages) = use_cases(AppConfig::default());

        packages.delete("pkg_5").await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
        assert_eq!(packages.best_offer().await.unwrap().unwrap().id, "pkg_1");
    }
}
