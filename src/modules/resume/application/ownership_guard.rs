// src/modules/resume/application/ownership_guard.rs

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, warn};

use crate::modules::resume::application::ports::outgoing::{
    ResumeOwnershipError, ResumeOwnershipQuery,
};
use crate::modules::resume::domain::entities::{ResumeId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnershipError {
    #[error("Access denied")]
    AccessDenied,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ResumeOwnershipError> for OwnershipError {
    fn from(err: ResumeOwnershipError) -> Self {
        match err {
            ResumeOwnershipError::DatabaseError(msg) => OwnershipError::RepositoryError(msg),
        }
    }
}

/// Gate run before every sub-resource operation.
///
/// A resume that does not exist and a resume owned by someone else produce
/// the same `AccessDenied`, so callers cannot probe for foreign resume ids.
#[derive(Clone)]
pub struct OwnershipGuard {
    query: Arc<dyn ResumeOwnershipQuery>,
}

impl OwnershipGuard {
    pub fn new(query: Arc<dyn ResumeOwnershipQuery>) -> Self {
        Self { query }
    }

    pub async fn assert_ownership(
        &self,
        resume_id: ResumeId,
        user_id: UserId,
    ) -> Result<(), OwnershipError> {
        let owned = self
            .query
            .is_owned_by(resume_id, user_id)
            .await
            .map_err(|e| {
                error!(error = %e, resume_id = %resume_id, "ownership lookup failed");
                OwnershipError::from(e)
            })?;

        if owned {
            return Ok(());
        }

        warn!(
            target: "audit",
            user_id = %user_id,
            resume_id = %resume_id,
            timestamp = %Utc::now().to_rfc3339(),
            "access denied to resume"
        );

        Err(OwnershipError::AccessDenied)
    }

    /// Keeps the ids `user_id` owns, preserving input order. Unowned ids are
    /// dropped silently; this path backs batched reads, not single requests.
    pub async fn owned_subset(
        &self,
        user_id: UserId,
        resume_ids: &[ResumeId],
    ) -> Result<Vec<ResumeId>, OwnershipError> {
        if resume_ids.is_empty() {
            return Ok(Vec::new());
        }

        let owned = self.query.filter_owned(user_id, resume_ids).await?;

        Ok(resume_ids
            .iter()
            .copied()
            .filter(|id| owned.contains(id))
            .collect())
    }
}
