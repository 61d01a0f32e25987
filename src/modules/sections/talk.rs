use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "talks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub event: String,

    pub date: Date,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

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
pub struct CreateTalkData {
    pub title: String,
    pub event: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchTalkData {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub event: PatchField<String>,
    #[serde(default)]
    pub date: PatchField<NaiveDate>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub url: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
}

pub struct TalkSection;

impl Section for TalkSection {
    const KIND: SectionKind = SectionKind::Talk;
    type Item = Model;
    type Create = CreateTalkData;
    type Patch = PatchTalkData;
}

impl SectionItem for Model {
    fn id(&self) -> Uuid {
        self.id
    }

    fn resume_id(&self) -> Uuid {
        self.resume_id
    }
}

impl SectionPayload for CreateTalkData {}

impl SectionPayload for PatchTalkData {}

impl PostgresSection for TalkSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateTalkData) -> ActiveModel {
        ActiveModel {
            title: Set(data.title.clone()),
            event: Set(data.event.clone()),
            date: Set(data.date),
            location: Set(data.location.clone()),
            url: Set(data.url.clone()),
            description: Set(data.description.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchTalkData) {
        patch_required(&mut model.title, &data.title);
        patch_required(&mut model.event, &data.event);
        patch_required(&mut model.date, &data.date);
        patch_nullable(&mut model.location, &data.location);
        patch_nullable(&mut model.url, &data.url);
        patch_nullable(&mut model.description, &data.description);
    }
}
