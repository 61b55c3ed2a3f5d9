use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use renoovy_core::money::ensure_percentage;
use renoovy_core::text::ensure_present;
use renoovy_core::{DomainError, DomainResult, Entity, EntityId, Money};

/// Installments offered when a package does not say otherwise.
pub const DEFAULT_INSTALLMENTS: u32 = 12;

/// Packages with at least this many units are "economic".
pub const ECONOMIC_QUANTITY: u32 = 3;

/// Packages with at least this many units are the "best value" tier.
pub const BEST_VALUE_QUANTITY: u32 = 5;

/// Package identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub EntityId);

impl PackageId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    /// Fresh time-ordered identifier (`pkg_<uuid>`).
    pub fn generate() -> Self {
        Self(EntityId::generate("pkg"))
    }

    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        EntityId::parse(value).map(Self)
    }
}

impl core::fmt::Display for PackageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Everything needed to build a [`Package`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewPackage {
    pub id: PackageId,
    pub quantity: u32,
    pub title: String,
    pub original_price: Money,
    /// Percentage in `[0, 100]`.
    pub discount: Decimal,
    pub installment_count: u32,
    pub popular: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPackage {
    /// Active, non-popular package paid in [`DEFAULT_INSTALLMENTS`] installments.
    pub fn new(
        id: PackageId,
        quantity: u32,
        title: impl Into<String>,
        original_price: Money,
        discount: Decimal,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            quantity,
            title: title.into(),
            original_price,
            discount,
            installment_count: DEFAULT_INSTALLMENTS,
            popular: false,
            is_active: true,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Prices derived from the original price, discount, quantity and installments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DerivedPrices {
    final_price: Money,
    per_unit: Money,
    installment_value: Money,
    discount_amount: Money,
    savings_per_unit: Decimal,
}

impl DerivedPrices {
    fn compute(
        original: &Money,
        discount: Decimal,
        quantity: u32,
        installments: u32,
    ) -> DomainResult<Self> {
        let final_price = original.apply_discount(discount)?;
        let per_unit = final_price.divide(quantity)?;
        let list_per_unit = original.divide(quantity)?;
        Ok(Self {
            final_price,
            per_unit,
            installment_value: final_price.divide(installments)?,
            discount_amount: original.percentage_of(discount)?,
            savings_per_unit: list_per_unit.amount() - per_unit.amount(),
        })
    }
}

/// A purchasable bundle of N units at a bulk discount.
///
/// Immutable: every transition returns a new `Package` with `updated_at`
/// refreshed.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    id: PackageId,
    quantity: u32,
    title: String,
    original_price: Money,
    discount: Decimal,
    installment_count: u32,
    popular: bool,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    prices: DerivedPrices,
}

impl Package {
    pub fn new(data: NewPackage) -> DomainResult<Self> {
        if data.quantity < 1 {
            return Err(DomainError::validation(
                "quantity must be a positive integer",
            ));
        }
        ensure_present("title", &data.title)?;
        if ensure_percentage(data.discount).is_err() {
            return Err(DomainError::validation(
                "discount must be between 0 and 100",
            ));
        }
        if data.installment_count < 1 {
            return Err(DomainError::validation(
                "installment count must be a positive integer",
            ));
        }

        let prices = DerivedPrices::compute(
            &data.original_price,
            data.discount,
            data.quantity,
            data.installment_count,
        )?;

        Ok(Self {
            id: data.id,
            quantity: data.quantity,
            title: data.title,
            original_price: data.original_price,
            discount: data.discount,
            installment_count: data.installment_count,
            popular: data.popular,
            is_active: data.is_active,
            created_at: data.created_at,
            updated_at: data.updated_at,
            prices,
        })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn original_price(&self) -> Money {
        self.original_price
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn installment_count(&self) -> u32 {
        self.installment_count
    }

    pub fn is_popular(&self) -> bool {
        self.popular
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Original price with the discount applied.
    pub fn final_price(&self) -> Money {
        self.prices.final_price
    }

    /// Final price divided by quantity.
    pub fn per_unit(&self) -> Money {
        self.prices.per_unit
    }

    /// Final price divided by the installment count.
    pub fn installment_value(&self) -> Money {
        self.prices.installment_value
    }

    /// How much the discount takes off the original price.
    pub fn discount_amount(&self) -> Money {
        self.prices.discount_amount
    }

    /// List price per unit minus discounted price per unit.
    pub fn savings_per_unit(&self) -> Decimal {
        self.prices.savings_per_unit
    }

    pub fn is_economic(&self) -> bool {
        self.quantity >= ECONOMIC_QUANTITY
    }

    pub fn is_best_value(&self) -> bool {
        self.quantity >= BEST_VALUE_QUANTITY
    }

    pub fn activate(&self, at: DateTime<Utc>) -> Package {
        let mut next = self.touched(at);
        next.is_active = true;
        next
    }

    pub fn deactivate(&self, at: DateTime<Utc>) -> Package {
        let mut next = self.touched(at);
        next.is_active = false;
        next
    }

    pub fn mark_popular(&self, popular: bool, at: DateTime<Utc>) -> Package {
        let mut next = self.touched(at);
        next.popular = popular;
        next
    }

    pub fn update_price(&self, price: Money, at: DateTime<Utc>) -> DomainResult<Package> {
        let mut data = self.to_new(at);
        data.original_price = price;
        Package::new(data)
    }

    pub fn rename(&self, title: impl Into<String>, at: DateTime<Utc>) -> DomainResult<Package> {
        let mut data = self.to_new(at);
        data.title = title.into();
        Package::new(data)
    }

    pub fn change_discount(&self, discount: Decimal, at: DateTime<Utc>) -> DomainResult<Package> {
        let mut data = self.to_new(at);
        data.discount = discount;
        Package::new(data)
    }

    pub fn change_installments(&self, count: u32, at: DateTime<Utc>) -> DomainResult<Package> {
        let mut data = self.to_new(at);
        data.installment_count = count;
        Package::new(data)
    }

    fn touched(&self, at: DateTime<Utc>) -> Package {
        let mut next = self.clone();
        next.updated_at = at;
        next
    }

    fn to_new(&self, at: DateTime<Utc>) -> NewPackage {
        NewPackage {
            id: self.id.clone(),
            quantity: self.quantity,
            title: self.title.clone(),
            original_price: self.original_price,
            discount: self.discount,
            installment_count: self.installment_count,
            popular: self.popular,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: at,
        }
    }
}

impl Entity for Package {
    type Id = PackageId;

    const KIND: &'static str = "package";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
