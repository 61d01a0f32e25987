use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::application::validation::{
    current_entry_has_no_end_date, patched_current_entry_has_no_end_date, ValidationHooks,
};
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "open_source_contributions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub project_name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub repository_url: Option<String>,

    // maintainer, contributor, ...
    #[sea_orm(column_type = "Text", nullable)]
    pub role: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub start_date: Option<Date>,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    pub is_current: bool,

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
pub struct CreateOpenSourceData {
    pub project_name: String,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchOpenSourceData {
    #[serde(default)]
    pub project_name: PatchField<String>,
    #[serde(default)]
    pub repository_url: PatchField<String>,
    #[serde(default)]
    pub role: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub is_current: PatchField<bool>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

pub struct OpenSourceSection;

impl Section for OpenSourceSection {
    const KIND: SectionKind = SectionKind::OpenSource;
    type Item = Model;
    type Create = CreateOpenSourceData;
    type Patch = PatchOpenSourceData;
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

impl SectionPayload for CreateOpenSourceData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order
    }
}

impl SectionPayload for PatchOpenSourceData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order.as_value().copied()
    }
}

impl PostgresSection for OpenSourceSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateOpenSourceData) -> ActiveModel {
        ActiveModel {
            project_name: Set(data.project_name.clone()),
            repository_url: Set(data.repository_url.clone()),
            role: Set(data.role.clone()),
            description: Set(data.description.clone()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchOpenSourceData) {
        patch_required(&mut model.project_name, &data.project_name);
        patch_nullable(&mut model.repository_url, &data.repository_url);
        patch_nullable(&mut model.role, &data.role);
        patch_nullable(&mut model.description, &data.description);
        patch_nullable(&mut model.start_date, &data.start_date);
        patch_nullable(&mut model.end_date, &data.end_date);
        patch_required(&mut model.is_current, &data.is_current);
        patch_required(&mut model.display_order, &data.display_order);
    }
}

pub fn hooks() -> ValidationHooks<OpenSourceSection> {
    ValidationHooks::new(
        |data: &CreateOpenSourceData| current_entry_has_no_end_date(data.is_current, data.end_date),
        |data: &PatchOpenSourceData| {
            patched_current_entry_has_no_end_date(&data.is_current, &data.end_date)
        },
    )
}
