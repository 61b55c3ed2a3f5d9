//! Request and response shapes of the use cases.
//!
//! Responses serialize in camelCase, the shape the landing page consumes.
//! Money amounts serialize as decimal strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use renoovy_catalog::Package;
use renoovy_content::{Benefit, Faq};
use renoovy_core::{Currency, Entity, Money};
use renoovy_reviews::Testimonial;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPackages {
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackage {
    pub quantity: u32,
    pub title: String,
    pub original_price: Decimal,
    pub discount: Decimal,
    pub installment_count: Option<u32>,
    #[serde(default)]
    pub popular: bool,
}

/// Partial package update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackage {
    pub id: String,
    pub title: Option<String>,
    pub original_price: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub installment_count: Option<u32>,
    pub popular: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTestimonials {
    pub limit: Option<usize>,
    #[serde(default)]
    pub only_featured: bool,
    pub min_rating: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    pub name: String,
    pub text: String,
    pub rating: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFaqs {
    pub category: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaq {
    pub question: String,
    pub answer: String,
    pub order: u32,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaq {
    pub id: String,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub order: Option<u32>,
    /// `Some(None)` clears the category.
    #[serde(default, with = "double_option")]
    pub category: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBenefits {
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBenefit {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBenefit {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: Option<u32>,
}

// Distinguishes an absent field (outer None) from an explicit null (Some(None)).
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyResponse {
    pub amount: Decimal,
    pub currency: Currency,
    pub formatted: String,
}

impl From<Money> for MoneyResponse {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency(),
            formatted: money.format(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub id: String,
    pub quantity: u32,
    pub title: String,
    pub original_price: MoneyResponse,
    pub discount: Decimal,
    pub final_price: MoneyResponse,
    pub per_unit: MoneyResponse,
    pub installment_count: u32,
    pub installment_value: MoneyResponse,
    pub popular: bool,
    pub is_active: bool,
}

impl From<&Package> for PackageResponse {
    fn from(package: &Package) -> Self {
        Self {
            id: package.id().to_string(),
            quantity: package.quantity(),
            title: package.title().to_string(),
            original_price: package.original_price().into(),
            discount: package.discount(),
            final_price: package.final_price().into(),
            per_unit: package.per_unit().into(),
            installment_count: package.installment_count(),
            installment_value: package.installment_value().into(),
            popular: package.is_popular(),
            is_active: package.is_active(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialResponse {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub text: String,
    pub truncated_text: String,
    pub rating: u8,
    pub stars: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Testimonial> for TestimonialResponse {
    fn from(testimonial: &Testimonial) -> Self {
        Self {
            id: testimonial.id().to_string(),
            name: testimonial.name().to_string(),
            display_name: testimonial.display_name(),
            text: testimonial.text().to_string(),
            truncated_text: testimonial.truncated_text(),
            rating: testimonial.rating().value(),
            stars: testimonial.rating().to_stars(),
            is_verified: testimonial.is_verified(),
            created_at: testimonial.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialStats {
    pub average_rating: f64,
    pub total_reviews: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqResponse {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub order: u32,
    pub category: Option<String>,
    pub is_active: bool,
}

impl From<&Faq> for FaqResponse {
    fn from(faq: &Faq) -> Self {
        Self {
            id: faq.id().to_string(),
            question: faq.question().to_string(),
            answer: faq.answer().to_string(),
            order: faq.order(),
            category: faq.category().map(str::to_string),
            is_active: faq.is_active(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub icon: String,
    pub order: u32,
    pub is_active: bool,
}

impl From<&Benefit> for BenefitResponse {
    fn from(benefit: &Benefit) -> Self {
        Self {
            id: benefit.id().to_string(),
            title: benefit.title().to_string(),
            description: benefit.description().to_string(),
            short_description: benefit.short_description(),
            icon: benefit.icon().to_string(),
            order: benefit.order(),
            is_active: benefit.is_active(),
        }
    }
}

/// Everything the landing page renders, in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub packages: Vec<PackageResponse>,
    pub recommended_package: Option<PackageResponse>,
    pub best_offer: Option<PackageResponse>,
    pub featured_testimonials: Vec<TestimonialResponse>,
    pub stats: TestimonialStats,
    pub faqs: Vec<FaqResponse>,
    pub benefits: Vec<BenefitResponse>,
}
