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
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub institution: String,

    #[sea_orm(column_type = "Text")]
    pub degree: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub field_of_study: Option<String>,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    pub is_current: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub grade: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

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
pub struct CreateEducationData {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchEducationData {
    #[serde(default)]
    pub institution: PatchField<String>,
    #[serde(default)]
    pub degree: PatchField<String>,
    #[serde(default)]
    pub field_of_study: PatchField<String>,
    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub is_current: PatchField<bool>,
    #[serde(default)]
    pub grade: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

pub struct EducationSection;

impl Section for EducationSection {
    const KIND: SectionKind = SectionKind::Education;
    type Item = Model;
    type Create = CreateEducationData;
    type Patch = PatchEducationData;
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

impl SectionPayload for CreateEducationData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order
    }
}

impl SectionPayload for PatchEducationData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order.as_value().copied()
    }
}

impl PostgresSection for EducationSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateEducationData) -> ActiveModel {
        ActiveModel {
            institution: Set(data.institution.clone()),
            degree: Set(data.degree.clone()),
            field_of_study: Set(data.field_of_study.clone()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
            grade: Set(data.grade.clone()),
            description: Set(data.description.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchEducationData) {
        patch_required(&mut model.institution, &data.institution);
        patch_required(&mut model.degree, &data.degree);
        patch_nullable(&mut model.field_of_study, &data.field_of_study);
        patch_required(&mut model.start_date, &data.start_date);
        patch_nullable(&mut model.end_date, &data.end_date);
        patch_required(&mut model.is_current, &data.is_current);
        patch_nullable(&mut model.grade, &data.grade);
        patch_nullable(&mut model.description, &data.description);
        patch_required(&mut model.display_order, &data.display_order);
    }
}

pub fn hooks() -> ValidationHooks<EducationSection> {
    ValidationHooks::new(
        |data: &CreateEducationData| current_entry_has_no_end_date(data.is_current, data.end_date),
        |data: &PatchEducationData| {
            patched_current_entry_has_no_end_date(&data.is_current, &data.end_date)
        },
    )
}
