use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Resumes {
    Table,
    Id,
}

/// Columns shared by every resume section table.
#[derive(DeriveIden)]
pub enum SectionColumn {
    Id,
    ResumeId,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}

/// Key, owning resume and timestamps. Callers add the domain columns.
pub fn section_table(table: &'static str) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(Alias::new(table))
        .if_not_exists()
        .col(
            ColumnDef::new(SectionColumn::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(SectionColumn::ResumeId).uuid().not_null())
        .col(
            ColumnDef::new(SectionColumn::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(SectionColumn::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{table}_resume_id"))
                .from(Alias::new(table), SectionColumn::ResumeId)
                .to(Resumes::Table, Resumes::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        );
    stmt
}

pub fn display_order_column() -> ColumnDef {
    ColumnDef::new(SectionColumn::DisplayOrder)
        .integer()
        .not_null()
        .default(0)
        .to_owned()
}

pub async fn create_index(
    manager: &SchemaManager<'_>,
    table: &str,
    suffix: &str,
    columns: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_{suffix} ON {table} ({columns});"
        ))
        .await?;
    Ok(())
}

pub async fn create_updated_at_trigger(
    manager: &SchemaManager<'_>,
    table: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            r#"
            CREATE TRIGGER update_{table}_updated_at
            BEFORE UPDATE ON {table}
            FOR EACH ROW
            EXECUTE FUNCTION update_updated_at_column();
            "#
        ))
        .await?;
    Ok(())
}

/// Dropping the table also drops its indexes and trigger.
pub async fn drop_section_table(manager: &SchemaManager<'_>, table: &'static str) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(Alias::new(table)).if_exists().to_owned())
        .await
}
