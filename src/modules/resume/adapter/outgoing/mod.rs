pub mod resume_ownership_postgres;
pub mod sea_orm_entity;

pub use resume_ownership_postgres::ResumeOwnershipPostgres;
