// src/modules/sections/certification.rs
//
// Newest first by issue date; no stored position.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub issuer: String,

    pub issue_date: Date,

    #[sea_orm(nullable)]
    pub expiry_date: Option<Date>,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_id: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCertificationData {
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchCertificationData {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub issuer: PatchField<String>,
    #[serde(default)]
    pub issue_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub expiry_date: PatchField<NaiveDate>,
    #[serde(default)]
    pub credential_id: PatchField<String>,
    #[serde(default)]
    pub credential_url: PatchField<String>,
}

pub struct CertificationSection;

impl Section for CertificationSection {
    const KIND: SectionKind = SectionKind::Certification;
    type Item = Model;
    type Create = CreateCertificationData;
    type Patch = PatchCertificationData;
}

impl SectionItem for Model {
    fn id(&self) -> Uuid {
        self.id
    }

    fn resume_id(&self) -> Uuid {
        self.resume_id
    }
}

impl SectionPayload for CreateCertificationData {}

impl SectionPayload for PatchCertificationData {}

impl PostgresSection for CertificationSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateCertificationData) -> ActiveModel {
        ActiveModel {
            name: Set(data.name.clone()),
            issuer: Set(data.issuer.clone()),
            issue_date: Set(data.issue_date),
            expiry_date: Set(data.expiry_date),
            credential_id: Set(data.credential_id.clone()),
            credential_url: Set(data.credential_url.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchCertificationData) {
        patch_required(&mut model.name, &data.name);
        patch_required(&mut model.issuer, &data.issuer);
        patch_required(&mut model.issue_date, &data.issue_date);
        patch_nullable(&mut model.expiry_date, &data.expiry_date);
        patch_nullable(&mut model.credential_id, &data.credential_id);
        patch_nullable(&mut model.credential_url, &data.credential_url);
    }
}
