use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

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
pub struct CreateAchievementData {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchAchievementData {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub date: PatchField<NaiveDate>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

pub struct AchievementSection;

impl Section for AchievementSection {
    const KIND: SectionKind = SectionKind::Achievement;
    type Item = Model;
    type Create = CreateAchievementData;
    type Patch = PatchAchievementData;
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

impl SectionPayload for CreateAchievementData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order
    }
}

impl SectionPayload for PatchAchievementData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order.as_value().copied()
    }
}

impl PostgresSection for AchievementSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateAchievementData) -> ActiveModel {
        ActiveModel {
            title: Set(data.title.clone()),
            description: Set(data.description.clone()),
            date: Set(data.date),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchAchievementData) {
        patch_required(&mut model.title, &data.title);
        patch_nullable(&mut model.description, &data.description);
        patch_nullable(&mut model.date, &data.date);
        patch_required(&mut model.display_order, &data.display_order);
    }
}
