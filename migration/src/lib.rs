pub use sea_orm_migration::prelude::*;

mod common;
mod m20260301_000001_create_resumes_table;
mod m20260301_000002_create_ordered_section_tables;
mod m20260301_000003_create_skills_table;
mod m20260301_000004_create_dated_section_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_resumes_table::Migration),
            Box::new(m20260301_000002_create_ordered_section_tables::Migration),
            Box::new(m20260301_000003_create_skills_table::Migration),
            Box::new(m20260301_000004_create_dated_section_tables::Migration),
        ]
    }
}
