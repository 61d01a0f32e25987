use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "awards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub issuer: Option<String>,

    pub date: Date,

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
pub struct CreateAwardData {
    pub title: String,
    #[serde(default)]
    pub issuer: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchAwardData {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub issuer: PatchField<String>,
    #[serde(default)]
    pub date: PatchField<NaiveDate>,
    #[serde(default)]
    pub description: PatchField<String>,
}

pub struct AwardSection;

impl Section for AwardSection {
    const KIND: SectionKind = SectionKind::Award;
    type Item = Model;
    type Create = CreateAwardData;
    type Patch = PatchAwardData;
}

impl SectionItem for Model {
    fn id(&self) -> Uuid {
        self.id
    }

    fn resume_id(&self) -> Uuid {
        self.resume_id
    }
}

impl SectionPayload for CreateAwardData {}

impl SectionPayload for PatchAwardData {}

impl PostgresSection for AwardSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateAwardData) -> ActiveModel {
        ActiveModel {
            title: Set(data.title.clone()),
            issuer: Set(data.issuer.clone()),
            date: Set(data.date),
            description: Set(data.description.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchAwardData) {
        patch_required(&mut model.title, &data.title);
        patch_nullable(&mut model.issuer, &data.issuer);
        patch_required(&mut model.date, &data.date);
        patch_nullable(&mut model.description, &data.description);
    }
}
