use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use renoovy_core::text::{ensure_length, ensure_present, truncate};
use renoovy_core::{DomainResult, Entity, EntityId};

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 100;
const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 300;
const SHORT_DESCRIPTION_LEN: usize = 80;

/// Benefit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenefitId(pub EntityId);

impl BenefitId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    /// Fresh time-ordered identifier (`benefit_<uuid>`).
    pub fn generate() -> Self {
        Self(EntityId::generate("benefit"))
    }

    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        EntityId::parse(value).map(Self)
    }
}

impl core::fmt::Display for BenefitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Everything needed to build a [`Benefit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBenefit {
    pub id: BenefitId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewBenefit {
    /// Active benefit.
    pub fn new(
        id: BenefitId,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        order: u32,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            order,
            is_active: true,
            created_at: at,
            updated_at: at,
        }
    }
}

/// A product benefit card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benefit {
    id: BenefitId,
    title: String,
    description: String,
    icon: String,
    order: u32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Benefit {
    pub fn new(data: NewBenefit) -> DomainResult<Self> {
        ensure_length("title", &data.title, TITLE_MIN, Some(TITLE_MAX))?;
        ensure_length(
            "description",
            &data.description,
            DESCRIPTION_MIN,
            Some(DESCRIPTION_MAX),
        )?;
        ensure_present("icon", &data.icon)?;

        Ok(Self {
            id: data.id,
            title: data.title,
            description: data.description,
            icon: data.icon,
            order: data.order,
            is_active: data.is_active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// First 80 chars of the description, with "..." when cut.
    pub fn short_description(&self) -> String {
        truncate(&self.description, SHORT_DESCRIPTION_LEN)
    }

    pub fn update_content(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Benefit> {
        let mut data = self.to_new(at);
        data.title = title.into();
        data.description = description.into();
        Benefit::new(data)
    }

    pub fn change_icon(
        &self,
        icon: impl Into<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Benefit> {
        let mut data = self.to_new(at);
        data.icon = icon.into();
        Benefit::new(data)
    }

    pub fn change_order(&self, order: u32, at: DateTime<Utc>) -> Benefit {
        Self {
            order,
            updated_at: at,
            ..self.clone()
        }
    }

    pub fn activate(&self, at: DateTime<Utc>) -> Benefit {
        Self {
            is_active: true,
            updated_at: at,
            ..self.clone()
        }
    }

    pub fn deactivate(&self, at: DateTime<Utc>) -> Benefit {
        Self {
            is_active: false,
            updated_at: at,
            ..self.clone()
        }
    }

    fn to_new(&self, at: DateTime<Utc>) -> NewBenefit {
        NewBenefit {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            order: self.order,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: at,
        }
    }
}

impl Entity for Benefit {
    type Id = BenefitId;

    const KIND: &'static str = "benefit";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
