use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use renoovy_core::text::ensure_length;
use renoovy_core::{DomainResult, Entity, EntityId};

const QUESTION_MIN: usize = 5;
const QUESTION_MAX: usize = 200;
const ANSWER_MIN: usize = 10;
const ANSWER_MAX: usize = 1000;

/// FAQ identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqId(pub EntityId);

impl FaqId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    /// Fresh time-ordered identifier (`faq_<uuid>`).
    pub fn generate() -> Self {
        Self(EntityId::generate("faq"))
    }

    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        EntityId::parse(value).map(Self)
    }
}

impl core::fmt::Display for FaqId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Everything needed to build a [`Faq`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFaq {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub order: u32,
    pub category: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewFaq {
    /// Active, uncategorized FAQ.
    pub fn new(
        id: FaqId,
        question: impl Into<String>,
        answer: impl Into<String>,
        order: u32,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            order,
            category: None,
            is_active: true,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Frequently asked question.
///
/// `order` positions the entry on the page. Duplicate orders are allowed;
/// readers sort stably so equal orders keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    id: FaqId,
    question: String,
    answer: String,
    order: u32,
    category: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Faq {
    pub fn new(data: NewFaq) -> DomainResult<Self> {
        ensure_length("question", &data.question, QUESTION_MIN, Some(QUESTION_MAX))?;
        ensure_length("answer", &data.answer, ANSWER_MIN, Some(ANSWER_MAX))?;

        Ok(Self {
            id: data.id,
            question: data.question,
            answer: data.answer,
            order: data.order,
            category: data.category,
            is_active: data.is_active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_question(
        &self,
        question: impl Into<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Faq> {
        let mut data = self.to_new(at);
        data.question = question.into();
        Faq::new(data)
    }

    pub fn update_answer(
        &self,
        answer: impl Into<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Faq> {
        let mut data = self.to_new(at);
        data.answer = answer.into();
        Faq::new(data)
    }

    pub fn change_order(&self, order: u32, at: DateTime<Utc>) -> Faq {
        Self {
            order,
            updated_at: at,
            ..self.clone()
        }
    }

    pub fn change_category(&self, category: Option<String>, at: DateTime<Utc>) -> Faq {
        Self {
            category,
            updated_at: at,
            ..self.clone()
        }
    }

    pub fn activate(&self, at: DateTime<Utc>) -> Faq {
        Self {
            is_active: true,
            updated_at: at,
            ..self.clone()
        }
    }

    pub fn deactivate(&self, at: DateTime<Utc>) -> Faq {
        Self {
            is_active: false,
            updated_at: at,
            ..self.clone()
        }
    }

    fn to_new(&self, at: DateTime<Utc>) -> NewFaq {
        NewFaq {
            id: self.id.clone(),
            question: self.question.clone(),
            answer: self.answer.clone(),
            order: self.order,
            category: self.category.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: at,
        }
    }
}

impl Entity for Faq {
    type Id = FaqId;

    const KIND: &'static str = "faq";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
