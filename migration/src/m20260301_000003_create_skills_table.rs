use sea_orm_migration::prelude::*;

use crate::common::{
    create_index, create_updated_at_trigger, display_order_column, drop_section_table,
    section_table,
};

const TABLE: &str = "skills";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                section_table(TABLE)
                    .col(ColumnDef::new(Skills::Name).text().not_null())
                    .col(ColumnDef::new(Skills::Category).text().not_null())
                    .col(ColumnDef::new(Skills::Level).text())
                    .col(display_order_column())
                    .to_owned(),
            )
            .await?;

        // Positions are dense per (resume, category)
        create_index(
            manager,
            TABLE,
            "category_order",
            "resume_id, category, display_order",
        )
        .await?;
        create_updated_at_trigger(manager, TABLE).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_section_table(manager, TABLE).await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Name,
    Category,
    Level,
}
