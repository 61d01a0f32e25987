use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::section::adapter::outgoing::active_patch::{patch_nullable, patch_required};
use crate::modules::section::adapter::outgoing::PostgresSection;
use crate::modules::section::domain::{Section, SectionItem, SectionKind, SectionPayload};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub resume_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    // free text: "native", "C1", "conversational"
    #[sea_orm(column_type = "Text", nullable)]
    pub proficiency: Option<String>,

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
pub struct CreateLanguageData {
    pub name: String,
    #[serde(default)]
    pub proficiency: Option<String>,
    #[serde(default)]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchLanguageData {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub proficiency: PatchField<String>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

pub struct LanguageSection;

impl Section for LanguageSection {
    const KIND: SectionKind = SectionKind::Language;
    type Item = Model;
    type Create = CreateLanguageData;
    type Patch = PatchLanguageData;
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

impl SectionPayload for CreateLanguageData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order
    }
}

impl SectionPayload for PatchLanguageData {
    fn explicit_order(&self) -> Option<i32> {
        self.display_order.as_value().copied()
    }
}

impl PostgresSection for LanguageSection {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn new_active_model(data: &CreateLanguageData) -> ActiveModel {
        ActiveModel {
            name: Set(data.name.clone()),
            proficiency: Set(data.proficiency.clone()),
            ..Default::default()
        }
    }

    fn apply_patch(model: &mut ActiveModel, data: &PatchLanguageData) {
        patch_required(&mut model.name, &data.name);
        patch_nullable(&mut model.proficiency, &data.proficiency);
        patch_required(&mut model.display_order, &data.display_order);
    }
}
