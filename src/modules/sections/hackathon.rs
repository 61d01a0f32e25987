use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hackathons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub organizer: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub project_name: Option<String>,

    // e.g. "1st place", "Finalist"
    #[sea_orm(column_type = "Text", nullable)]
    pub placement: Option<String>,

    pub date: Date,

    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHackathonData {
    pub name: String,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub placement: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchHackathonData {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub organizer: PatchField<String>,
    #[serde(default)]
    pub project_name: PatchField<String>,
    #[serde(default)]
    pub placement: PatchField<String>,
    #[serde(default)]
    pub date: PatchField<NaiveDate>,
    #[serde(default)]
    pub url: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
}

pub struct HackathonSection;

impl Section for HackathonSection {
    const KIND: SectionKind = SectionKind::Hackathon;
    type Item = Model;
    type Create = CreateHackathonData;
    type Patch = PatchHackathonData;
}

impl SectionItem for Model {
    fn id(&self) -> Uuid {
        self.id
    }

    fn resume_id(&self) -> Uuid {
        self.resume_id
    }
}

impl SectionPayload for CreateHackathonData {}

impl SectionPayload for PatchHackathonData {}

impl PostgresSection for HackathonSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateHackathonData) -> ActiveModel {
        ActiveModel {
            name: Set(data.name.clone()),
            organizer: Set(data.organizer.clone()),
            project_name: Set(data.project_name.clone()),
            placement: Set(data.placement.clone()),
            date: Set(data.date),
            url: Set(data.url.clone()),
            description: Set(data.description.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchHackathonData) {
        patch_required(&mut model.name, &data.name);
        patch_nullable(&mut model.organizer, &data.organizer);
        patch_nullable(&mut model.project_name, &data.project_name);
        patch_nullable(&mut model.placement, &data.placement);
        patch_required(&mut model.date, &data.date);
        patch_nullable(&mut model.url, &data.url);
        patch_nullable(&mut model.description, &data.description);
    }
}
