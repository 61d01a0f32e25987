// src/modules/sections/skill.rs
//
// Skills are ordered inside their category; each category keeps its own
// 0-based position sequence.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub level: Option<String>,

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
pub struct CreateSkillData {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchSkillData {
    #[serde(default)]
    pub name: PatchField<String>,
    /// Moving to another category appends the skill to that category
    /// unless `display_order` is given too.
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub level: PatchField<String>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

pub struct SkillSection;

impl Section for SkillSection {
    const KIND: SectionKind = SectionKind::Skill;
    type Item = Model;
    type Create = CreateSkillData;
    type Patch = PatchSkillData;
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

    fn group_key(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl SectionPayload for CreateSkillData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order
    }

    fn group_key(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl SectionPayload for PatchSkillData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order.as_value().copied()
    }

    fn group_key(&self) -> Option<&str> {
        self.category.as_value().map(String::as_str)
    }
}

impl PostgresSection for SkillSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateSkillData) -> ActiveModel {
        ActiveModel {
            name: Set(data.name.clone()),
            category: Set(data.category.clone()),
            level: Set(data.level.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchSkillData) {
        patch_required(&mut model.name, &data.name);
        patch_required(&mut model.category, &data.category);
        patch_nullable(&mut model.level, &data.level);
        patch_required(&mut model.display_order, &data.display_order);
    }
}
