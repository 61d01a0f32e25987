use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

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
pub struct CreateInterestData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchInterestData {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

pub struct InterestSection;

impl Section for InterestSection {
    const KIND: SectionKind = SectionKind::Interest;
    type Item = Model;
    type Create = CreateInterestData;
    type Patch = PatchInterestData;
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

impl SectionPayload for CreateInterestData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order
    }
}

impl SectionPayload for PatchInterestData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order.as_value().copied()
    }
}

impl PostgresSection for InterestSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateInterestData) -> ActiveModel {
        ActiveModel {
            name: Set(data.name.clone()),
            description: Set(data.description.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchInterestData) {
        patch_required(&mut model.name, &data.name);
        patch_nullable(&mut model.description, &data.description);
        patch_required(&mut model.display_order, &data.display_order);
    }
}
