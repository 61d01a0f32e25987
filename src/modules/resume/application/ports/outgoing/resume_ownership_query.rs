// src/modules/resume/application/ports/outgoing/resume_ownership_query.rs

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::resume::domain::entities::{ResumeId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeOwnershipError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only view of resume ownership.
#[async_trait]
pub trait ResumeOwnershipQuery: Send + Sync {
    /// True only when a resume with `resume_id` exists and belongs to `owner`.
    async fn is_owned_by(
        &self,
        resume_id: ResumeId,
        owner: UserId,
    ) -> Result<bool, ResumeOwnershipError>;

    /// Subset of `resume_ids` that belong to `owner`.
    async fn filter_owned(
        &self,
        owner: UserId,
        resume_ids: &[ResumeId],
    ) -> Result<Vec<ResumeId>, ResumeOwnershipError>;
}
