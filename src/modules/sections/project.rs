use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{
    json_list, patch_json_list, patch_nullable, patch_required,
};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub repository_url: Option<String>,

    #[sea_orm(nullable)]
    pub start_date: Option<Date>,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    // Stored as JSONB (array of strings)
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

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
pub struct CreateProjectData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

/// `technologies` replaces the whole array; there is no merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchProjectData {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub url: PatchField<String>,
    #[serde(default)]
    pub repository_url: PatchField<String>,
    #[serde(default)]
    pub start_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub end_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub technologies: PatchField<Vec<String>>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

pub struct ProjectSection;

impl Section for ProjectSection {
    const KIND: SectionKind = SectionKind::Project;
    type Item = Model;
    type Create = CreateProjectData;
    type Patch = PatchProjectData;
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

impl SectionPayload for CreateProjectData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order
    }
}

impl SectionPayload for PatchProjectData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order.as_value().copied()
    }
}

impl PostgresSection for ProjectSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateProjectData) -> ActiveModel {
        ActiveModel {
            name: Set(data.name.clone()),
            description: Set(data.description.clone()),
            url: Set(data.url.clone()),
            repository_url: Set(data.repository_url.clone()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            technologies: Set(json_list(&data.technologies)),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchProjectData) {
        patch_required(&mut model.name, &data.name);
        patch_nullable(&mut model.description, &data.description);
        patch_nullable(&mut model.url, &data.url);
        patch_nullable(&mut model.repository_url, &data.repository_url);
        patch_nullable(&mut model.start_date, &data.start_date);
        patch_nullable(&mut model.end_date, &data.end_date);
        patch_json_list(&mut model.technologies, &data.technologies);
        patch_required(&mut model.display_order, &data.display_order);
    }
}
