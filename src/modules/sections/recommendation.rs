use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recommendations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub author_name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub author_title: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub relationship: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(nullable)]
    pub date: Option<Date>,

    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecommendationData {
    pub author_name: String,
    #[serde(default)]
    pub author_title: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
    pub content: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchRecommendationData {
    #[serde(default)]
    pub author_name: PatchField<String>,
    #[serde(default)]
    pub author_title: PatchField<String>,
    #[serde(default)]
    pub relationship: PatchField<String>,
    #[serde(default)]
    pub content: PatchField<String>,
    #[serde(default)]
    pub date: PatchField<NaiveDate>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

pub struct RecommendationSection;

impl Section for RecommendationSection {
    const KIND: SectionKind = SectionKind::Recommendation;
    type Item = Model;
    type Create = CreateRecommendationData;
    type Patch = PatchRecommendationData;
}

impl SectionItem for Model {
    fn id(&self) -> Uuid {
        self.id
    }

    fn resume_id(&self) -> Uuid {
        self.resume_id
    }

    fn display_order(&self) -> Option<i32> {
        Some(self.display_order)
    }
}

impl SectionPayload for CreateRecommendationData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order
    }
}

impl SectionPayload for PatchRecommendationData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order.as_value().copied()
    }
}

impl PostgresSection for RecommendationSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateRecommendationData) -> ActiveModel {
        ActiveModel {
            author_name: Set(data.author_name.clone()),
            author_title: Set(data.author_title.clone()),
            relationship: Set(data.relationship.clone()),
            content: Set(data.content.clone()),
            date: Set(data.date),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchRecommendationData) {
        patch_required(&mut model.author_name, &data.author_name);
        patch_nullable(&mut model.author_title, &data.author_title);
        patch_nullable(&mut model.relationship, &data.relationship);
        patch_required(&mut model.content, &data.content);
        patch_nullable(&mut model.date, &data.date);
        patch_required(&mut model.display_order, &data.display_order);
    }
}
