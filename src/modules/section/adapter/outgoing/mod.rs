pub mod active_patch;
pub mod section_repository_postgres;

pub use section_repository_postgres::{PostgresSection, SectionRepositoryPostgres};
