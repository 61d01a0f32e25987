use sea_orm_migration::prelude::*;

use crate::common::{create_index, create_updated_at_trigger, drop_section_table, section_table};

/// Sections listed newest first. They have no display_order column.
const TABLES: [(&str, &str); 6] = [
    ("certifications", "issue_date"),
    ("awards", "date"),
    ("publications", "publication_date"),
    ("talks", "date"),
    ("hackathons", "date"),
    ("bug_bounties", "reported_at"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                section_table("certifications")
                    .col(ColumnDef::new(Certifications::Name).text().not_null())
                    .col(ColumnDef::new(Certifications::Issuer).text().not_null())
                    .col(ColumnDef::new(Certifications::IssueDate).date().not_null())
                    .col(ColumnDef::new(Certifications::ExpiryDate).date())
                    .col(ColumnDef::new(Certifications::CredentialId).text())
                    .col(ColumnDef::new(Certifications::CredentialUrl).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                section_table("awards")
                    .col(ColumnDef::new(Awards::Title).text().not_null())
                    .col(ColumnDef::new(Awards::Issuer).text())
                    .col(ColumnDef::new(Awards::Date).date().not_null())
                    .col(ColumnDef::new(Awards::Description).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                section_table("publications")
                    .col(ColumnDef::new(Publications::Title).text().not_null())
                    .col(ColumnDef::new(Publications::Publisher).text())
                    .col(
                        ColumnDef::new(Publications::PublicationDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Publications::Url).text())
                    .col(ColumnDef::new(Publications::Description).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                section_table("talks")
                    .col(ColumnDef::new(Talks::Title).text().not_null())
                    .col(ColumnDef::new(Talks::Event).text().not_null())
                    .col(ColumnDef::new(Talks::Date).date().not_null())
                    .col(ColumnDef::new(Talks::Location).text())
                    .col(ColumnDef::new(Talks::Url).text())
                    .col(ColumnDef::new(Talks::Description).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                section_table("hackathons")
                    .col(ColumnDef::new(Hackathons::Name).text().not_null())
                    .col(ColumnDef::new(Hackathons::Organizer).text())
                    .col(ColumnDef::new(Hackathons::ProjectName).text())
                    .col(ColumnDef::new(Hackathons::Placement).text())
                    .col(ColumnDef::new(Hackathons::Date).date().not_null())
                    .col(ColumnDef::new(Hackathons::Url).text())
                    .col(ColumnDef::new(Hackathons::Description).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                section_table("bug_bounties")
                    .col(ColumnDef::new(BugBounties::Platform).text().not_null())
                    .col(ColumnDef::new(BugBounties::Program).text().not_null())
                    .col(ColumnDef::new(BugBounties::Title).text().not_null())
                    .col(ColumnDef::new(BugBounties::Severity).text())
                    .col(ColumnDef::new(BugBounties::Reward).text())
                    .col(ColumnDef::new(BugBounties::ReportedAt).date().not_null())
                    .col(ColumnDef::new(BugBounties::Url).text())
                    .to_owned(),
            )
            .await?;

        for (table, date_column) in TABLES {
            create_index(
                manager,
                table,
                "date_desc",
                &format!("resume_id, {date_column} DESC"),
            )
            .await?;
            create_updated_at_trigger(manager, table).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for &(table, _) in TABLES.iter().rev() {
            drop_section_table(manager, table).await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Certifications {
    Name,
    Issuer,
    IssueDate,
    ExpiryDate,
    CredentialId,
    CredentialUrl,
}

#[derive(DeriveIden)]
enum Awards {
    Title,
    Issuer,
    Date,
    Description,
}

#[derive(DeriveIden)]
enum Publications {
    Title,
    Publisher,
    PublicationDate,
    Url,
    Description,
}

#[derive(DeriveIden)]
enum Talks {
    Title,
    Event,
    Date,
    Location,
    Url,
    Description,
}

#[derive(DeriveIden)]
enum Hackathons {
    Name,
    Organizer,
    ProjectName,
    Placement,
    Date,
    Url,
    Description,
}

#[derive(DeriveIden)]
enum BugBounties {
    Platform,
    Program,
    Title,
    Severity,
    Reward,
    ReportedAt,
    Url,
}
