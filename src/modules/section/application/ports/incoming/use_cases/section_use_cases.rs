use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::resume::application::OwnershipError;
use crate::modules::resume::domain::entities::{ResumeId, UserId};
use crate::modules::section::application::ports::outgoing::SectionRepositoryError;
use crate::modules::section::domain::Section;
use crate::shared::pagination::PageResult;
use crate::shared::response::Acknowledgement;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    #[error("Access denied")]
    AccessDenied,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<OwnershipError> for SectionError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::AccessDenied => SectionError::AccessDenied,
            OwnershipError::RepositoryError(msg) => SectionError::RepositoryError(msg),
        }
    }
}

impl From<SectionRepositoryError> for SectionError {
    fn from(err: SectionRepositoryError) -> Self {
        match err {
            SectionRepositoryError::ReorderUnsupported => {
                SectionError::ValidationFailed(err.to_string())
            }
            SectionRepositoryError::DatabaseError(msg) => SectionError::RepositoryError(msg),
            SectionRepositoryError::UnknownColumn(column) => {
                SectionError::RepositoryError(format!("unknown column {column}"))
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Query
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Group filter for multi-field sections (skill category).
    pub group: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
// Every operation verifies that `user_id` owns `resume_id` before
// anything else happens.
//

#[async_trait]
pub trait SectionUseCases<S: Section>: Send + Sync {
    async fn list_for_resume(
        &self,
        resume_id: ResumeId,
        user_id: UserId,
        query: ListQuery,
    ) -> Result<PageResult<S::Item>, SectionError>;

    async fn get_by_id(
        &self,
        resume_id: ResumeId,
        id: Uuid,
        user_id: UserId,
    ) -> Result<S::Item, SectionError>;

    async fn add_to_resume(
        &self,
        resume_id: ResumeId,
        user_id: UserId,
        data: S::Create,
    ) -> Result<S::Item, SectionError>;

    async fn update_by_id(
        &self,
        resume_id: ResumeId,
        id: Uuid,
        user_id: UserId,
        data: S::Patch,
    ) -> Result<S::Item, SectionError>;

    async fn delete_by_id(
        &self,
        resume_id: ResumeId,
        id: Uuid,
        user_id: UserId,
    ) -> Result<Acknowledgement, SectionError>;

    async fn reorder_in_resume(
        &self,
        resume_id: ResumeId,
        user_id: UserId,
        ids: Vec<Uuid>,
    ) -> Result<Acknowledgement, SectionError>;

    /// Items of every listed resume the user owns, keyed by resume.
    /// Resumes the user does not own are absent from the map.
    async fn list_for_resumes(
        &self,
        user_id: UserId,
        resume_ids: Vec<ResumeId>,
    ) -> Result<HashMap<ResumeId, Vec<S::Item>>, SectionError>;
}
