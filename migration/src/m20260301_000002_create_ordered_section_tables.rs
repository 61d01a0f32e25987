use sea_orm_migration::prelude::*;

use crate::common::{
    create_index, create_updated_at_trigger, display_order_column, drop_section_table,
    section_table,
};

/// Sections whose items keep a user-chosen position.
const TABLES: [&str; 8] = [
    "experiences",
    "educations",
    "projects",
    "open_source_contributions",
    "languages",
    "interests",
    "recommendations",
    "achievements",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // experiences
        // =====================================================
        manager
            .create_table(
                section_table("experiences")
                    .col(ColumnDef::new(Experiences::Company).text().not_null())
                    .col(ColumnDef::new(Experiences::Position).text().not_null())
                    .col(ColumnDef::new(Experiences::Location).text())
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(
                        ColumnDef::new(Experiences::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Experiences::Description).text())
                    .col(
                        ColumnDef::new(Experiences::Highlights)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(display_order_column())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // educations
        // =====================================================
        manager
            .create_table(
                section_table("educations")
                    .col(ColumnDef::new(Educations::Institution).text().not_null())
                    .col(ColumnDef::new(Educations::Degree).text().not_null())
                    .col(ColumnDef::new(Educations::FieldOfStudy).text())
                    .col(ColumnDef::new(Educations::StartDate).date().not_null())
                    .col(ColumnDef::new(Educations::EndDate).date())
                    .col(
                        ColumnDef::new(Educations::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Educations::Grade).text())
                    .col(ColumnDef::new(Educations::Description).text())
                    .col(display_order_column())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // projects
        // =====================================================
        manager
            .create_table(
                section_table("projects")
                    .col(ColumnDef::new(Projects::Name).text().not_null())
                    .col(ColumnDef::new(Projects::Description).text())
                    .col(ColumnDef::new(Projects::Url).text())
                    .col(ColumnDef::new(Projects::RepositoryUrl).text())
                    .col(ColumnDef::new(Projects::StartDate).date())
                    .col(ColumnDef::new(Projects::EndDate).date())
                    .col(
                        ColumnDef::new(Projects::Technologies)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(display_order_column())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // open_source_contributions
        // =====================================================
        manager
            .create_table(
                section_table("open_source_contributions")
                    .col(
                        ColumnDef::new(OpenSourceContributions::ProjectName)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OpenSourceContributions::RepositoryUrl).text())
                    .col(ColumnDef::new(OpenSourceContributions::Role).text())
                    .col(ColumnDef::new(OpenSourceContributions::Description).text())
                    .col(ColumnDef::new(OpenSourceContributions::StartDate).date())
                    .col(ColumnDef::new(OpenSourceContributions::EndDate).date())
                    .col(
                        ColumnDef::new(OpenSourceContributions::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(display_order_column())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // languages, interests
        // =====================================================
        manager
            .create_table(
                section_table("languages")
                    .col(ColumnDef::new(Languages::Name).text().not_null())
                    .col(ColumnDef::new(Languages::Proficiency).text())
                    .col(display_order_column())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                section_table("interests")
                    .col(ColumnDef::new(Interests::Name).text().not_null())
                    .col(ColumnDef::new(Interests::Description).text())
                    .col(display_order_column())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // recommendations, achievements
        // =====================================================
        manager
            .create_table(
                section_table("recommendations")
                    .col(ColumnDef::new(Recommendations::AuthorName).text().not_null())
                    .col(ColumnDef::new(Recommendations::AuthorTitle).text())
                    .col(ColumnDef::new(Recommendations::Relationship).text())
                    .col(ColumnDef::new(Recommendations::Content).text().not_null())
                    .col(ColumnDef::new(Recommendations::Date).date())
                    .col(display_order_column())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                section_table("achievements")
                    .col(ColumnDef::new(Achievements::Title).text().not_null())
                    .col(ColumnDef::new(Achievements::Description).text())
                    .col(ColumnDef::new(Achievements::Date).date())
                    .col(display_order_column())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes and updated_at triggers
        // =====================================================
        for table in TABLES {
            create_index(manager, table, "order", "resume_id, display_order").await?;
            create_updated_at_trigger(manager, table).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for &table in TABLES.iter().rev() {
            drop_section_table(manager, table).await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Company,
    Position,
    Location,
    StartDate,
    EndDate,
    IsCurrent,
    Description,
    Highlights,
}

#[derive(DeriveIden)]
enum Educations {
    Institution,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    IsCurrent,
    Grade,
    Description,
}

#[derive(DeriveIden)]
enum Projects {
    Name,
    Description,
    Url,
    RepositoryUrl,
    StartDate,
    EndDate,
    Technologies,
}

#[derive(DeriveIden)]
enum OpenSourceContributions {
    ProjectName,
    RepositoryUrl,
    Role,
    Description,
    StartDate,
    EndDate,
    IsCurrent,
}

#[derive(DeriveIden)]
enum Languages {
    Name,
    Proficiency,
}

#[derive(DeriveIden)]
enum Interests {
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Recommendations {
    AuthorName,
    AuthorTitle,
    Relationship,
    Content,
    Date,
}

#[derive(DeriveIden)]
enum Achievements {
    Title,
    Description,
    Date,
}
