// src/modules/sections/experience.rs

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{
    json_list, patch_json_list, patch_nullable, patch_required,
};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::application::validation::{
    current_entry_has_no_end_date, patched_current_entry_has_no_end_date, ValidationHooks,
};
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub company: String,

    #[sea_orm(column_type = "Text")]
    pub position: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    pub is_current: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    // Array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub highlights: Json,

    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//
// ──────────────────────────────────────────────────────────
// Payloads
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExperienceData {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchExperienceData {
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub position: PatchField<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub is_current: PatchField<bool>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub highlights: PatchField<Vec<String>>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Binding
// ──────────────────────────────────────────────────────────
//

pub struct ExperienceSection;

impl Section for ExperienceSection {
    const KIND: SectionKind = SectionKind::Experience;
    type Item = Model;
    type Create = CreateExperienceData;
    type Patch = PatchExperienceData;
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

impl SectionPayload for CreateExperienceData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order
    }
}

impl SectionPayload for PatchExperienceData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order.as_value().copied()
    }
}

impl PostgresSection for ExperienceSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateExperienceData) -> ActiveModel {
        ActiveModel {
            company: Set(data.company.clone()),
            position: Set(data.position.clone()),
            location: Set(data.location.clone()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
            description: Set(data.description.clone()),
            highlights: Set(json_list(&data.highlights)),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchExperienceData) {
        patch_required(&mut model.company, &data.company);
        patch_required(&mut model.position, &data.position);
        patch_nullable(&mut model.location, &data.location);
        patch_required(&mut model.start_date, &data.start_date);
        patch_nullable(&mut model.end_date, &data.end_date);
        patch_required(&mut model.is_current, &data.is_current);
        patch_nullable(&mut model.description, &data.description);
        patch_json_list(&mut model.highlights, &data.highlights);
        patch_required(&mut model.display_order, &data.display_order);
    }
}

fn validate_create(data: &CreateExperienceData) -> Result<(), String> {
    current_entry_has_no_end_date(data.is_current, data.end_date)
}

fn validate_patch(data: &PatchExperienceData) -> Result<(), String> {
    patched_current_entry_has_no_end_date(&data.is_current, &data.end_date)
}

pub fn hooks() -> ValidationHooks<ExperienceSection> {
    ValidationHooks::new(validate_create, validate_patch)
}
