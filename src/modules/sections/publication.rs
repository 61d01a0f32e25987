use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "publications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub publisher: Option<String>,

    pub publication_date: Date,

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
pub struct CreatePublicationData {
    pub title: String,
    #[serde(default)]
    pub publisher: Option<String>,
    pub publication_date: NaiveDate,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchPublicationData {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub publisher: PatchField<String>,
    #[serde(default)]
    pub publication_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub url: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
}

pub struct PublicationSection;

impl Section for PublicationSection {
    const KIND: SectionKind = SectionKind::Publication;
    type Item = Model;
    type Create = CreatePublicationData;
    type Patch = PatchPublicationData;
}

impl SectionItem for Model {
    fn id(&self) -> Uuid {
        self.id
    }

    fn resume_id(&self) -> Uuid {
        self.resume_id
    }
}

impl SectionPayload for CreatePublicationData {}

impl SectionPayload for PatchPublicationData {}

impl PostgresSection for PublicationSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreatePublicationData) -> ActiveModel {
        ActiveModel {
            title: Set(data.title.clone()),
            publisher: Set(data.publisher.clone()),
            publication_date: Set(data.publication_date),
            url: Set(data.url.clone()),
            description: Set(data.description.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchPublicationData) {
        patch_required(&mut model.title, &data.title);
        patch_nullable(&mut model.publisher, &data.publisher);
        patch_required(&mut model.publication_date, &data.publication_date);
        patch_nullable(&mut model.url, &data.url);
        patch_nullable(&mut model.description, &data.description);
    }
}
