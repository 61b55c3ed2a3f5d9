use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use renoovy_core::text::{ensure_length, truncate};
use renoovy_core::{DomainResult, Entity, EntityId, Rating};

const NAME_MIN: usize = 2;
const TEXT_MIN: usize = 10;
const TEXT_MAX: usize = 500;
const TRUNCATED_TEXT_LEN: usize = 150;

/// Testimonials rated at least this high are "high rating".
pub const HIGH_RATING: u8 = 4;

/// Testimonial identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestimonialId(pub EntityId);

impl TestimonialId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    /// Fresh time-ordered identifier (`test_<uuid>`).
    pub fn generate() -> Self {
        Self(EntityId::generate("test"))
    }

    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        EntityId::parse(value).map(Self)
    }
}

impl core::fmt::Display for TestimonialId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Everything needed to build a [`Testimonial`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimonial {
    pub id: TestimonialId,
    pub name: String,
    pub text: String,
    pub rating: Rating,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewTestimonial {
    /// Unverified, active testimonial.
    pub fn new(
        id: TestimonialId,
        name: impl Into<String>,
        text: impl Into<String>,
        rating: Rating,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
            rating,
            is_verified: false,
            is_active: true,
            created_at: at,
        }
    }
}

/// A customer review shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    id: TestimonialId,
    name: String,
    text: String,
    rating: Rating,
    is_verified: bool,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn new(data: NewTestimonial) -> DomainResult<Self> {
        ensure_length("name", &data.name, NAME_MIN, None)?;
        ensure_length("testimonial text", &data.text, TEXT_MIN, Some(TEXT_MAX))?;

        Ok(Self {
            id: data.id,
            name: data.name,
            text: data.text,
            rating: data.rating,
            is_verified: data.is_verified,
            is_active: data.is_active,
            created_at: data.created_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// First 150 chars of the text, with "..." when cut.
    pub fn truncated_text(&self) -> String {
        truncate(&self.text, TRUNCATED_TEXT_LEN)
    }

    /// First name plus last-name initial ("Fernanda Silva" -> "Fernanda S.").
    pub fn display_name(&self) -> String {
        let mut parts = self.name.split_whitespace();
        let first = parts.next().unwrap_or_default();
        match parts.last().and_then(|last| last.chars().next()) {
            Some(initial) => format!("{first} {initial}."),
            None => first.to_string(),
        }
    }

    pub fn is_high_rating(&self) -> bool {
        self.rating.value() >= HIGH_RATING
    }

    pub fn verify(&self) -> Testimonial {
        Self {
            is_verified: true,
            ..self.clone()
        }
    }

    pub fn activate(&self) -> Testimonial {
        Self {
            is_active: true,
            ..self.clone()
        }
    }

    pub fn deactivate(&self) -> Testimonial {
        Self {
            is_active: false,
            ..self.clone()
        }
    }
}

impl Entity for Testimonial {
    type Id = TestimonialId;

    const KIND: &'static str = "testimonial";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
