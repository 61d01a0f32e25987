use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bug_bounties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    // HackerOne, Bugcrowd, vendor program...
    #[sea_orm(column_type = "Text")]
    pub platform: String,

    #[sea_orm(column_type = "Text")]
    pub program: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub severity: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub reward: Option<String>,

    pub reported_at: Date,

    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBugBountyData {
    pub platform: String,
    pub program: String,
    pub title: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub reward: Option<String>,
    pub reported_at: NaiveDate,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchBugBountyData {
    #[serde(default)]
    pub platform: PatchField<String>,
    #[serde(default)]
    pub program: PatchField<String>,
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub severity: PatchField<String>,
    #[serde(default)]
    pub reward: PatchField<String>,
    #[serde(default)]
    pub reported_at: PatchField<NaiveDate>,
    #[serde(default)]
    pub url: PatchField<String>,
}

pub struct BugBountySection;

impl Section for BugBountySection {
    const KIND: SectionKind = SectionKind::BugBounty;
    type Item = Model;
    type Create = CreateBugBountyData;
    type Patch = PatchBugBountyData;
}

impl SectionItem for Model {
    fn id(&self) -> Uuid {
        self.id
    }

    fn resume_id(&self) -> Uuid {
        self.resume_id
    }
}

impl SectionPayload for CreateBugBountyData {}

impl SectionPayload for PatchBugBountyData {}

impl PostgresSection for BugBountySection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateBugBountyData) -> ActiveModel {
        ActiveModel {
            platform: Set(data.platform.clone()),
            program: Set(data.program.clone()),
            title: Set(data.title.clone()),
            severity: Set(data.severity.clone()),
            reward: Set(data.reward.clone()),
            reported_at: Set(data.reported_at),
            url: Set(data.url.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchBugBountyData) {
        patch_required(&mut model.platform, &data.platform);
        patch_required(&mut model.program, &data.program);
        patch_required(&mut model.title, &data.title);
        patch_nullable(&mut model.severity, &data.severity);
        patch_nullable(&mut model.reward, &data.reward);
        patch_required(&mut model.reported_at, &data.reported_at);
        patch_nullable(&mut model.url, &data.url);
    }
}
