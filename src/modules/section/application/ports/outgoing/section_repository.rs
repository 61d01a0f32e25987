// src/modules/section/application/ports/outgoing/section_repository.rs

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::resume::domain::entities::ResumeId;
use crate::modules::section::domain::Section;
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Section is ordered by date and cannot be reordered")]
    ReorderUnsupported,
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
// Every read and write is scoped by resume id. Callers check ownership
// of the resume before reaching the repository.
//

#[async_trait]
pub trait SectionRepository<S: Section>: Send + Sync {
    /// One page of the resume's items in strategy order, plus the total.
    /// `group` narrows multi-field sections to one group and is ignored
    /// elsewhere.
    async fn find_all_paginated(
        &self,
        resume_id: ResumeId,
        page: PageRequest,
        group: Option<String>,
    ) -> Result<PageResult<S::Item>, SectionRepositoryError>;

    async fn find_one(
        &self,
        id: Uuid,
        resume_id: ResumeId,
    ) -> Result<Option<S::Item>, SectionRepositoryError>;

    /// Inserts a new item, appending it to its ordering scope unless the
    /// payload carries an explicit position.
    async fn create(
        &self,
        resume_id: ResumeId,
        data: S::Create,
    ) -> Result<S::Item, SectionRepositoryError>;

    /// Applies a partial update. `None` when no item matches both ids.
    async fn update(
        &self,
        id: Uuid,
        resume_id: ResumeId,
        data: S::Patch,
    ) -> Result<Option<S::Item>, SectionRepositoryError>;

    /// True when a row was removed.
    async fn delete(&self, id: Uuid, resume_id: ResumeId) -> Result<bool, SectionRepositoryError>;

    /// Rewrites positions densely following `ids`, all or nothing.
    async fn reorder(&self, resume_id: ResumeId, ids: &[Uuid])
        -> Result<(), SectionRepositoryError>;

    /// Every item of the given resumes, in strategy order per resume.
    async fn find_all_for_resumes(
        &self,
        resume_ids: &[ResumeId],
    ) -> Result<Vec<S::Item>, SectionRepositoryError>;
}
