// src/modules/resume/adapter/outgoing/resume_ownership_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::resume::adapter::outgoing::sea_orm_entity::resumes::{Column, Entity};
use crate::modules::resume::application::ports::outgoing::{
    ResumeOwnershipError, ResumeOwnershipQuery,
};
use crate::modules::resume::domain::entities::{ResumeId, UserId};

#[derive(Clone)]
pub struct ResumeOwnershipPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeOwnershipPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeOwnershipQuery for ResumeOwnershipPostgres {
    async fn is_owned_by(
        &self,
        resume_id: ResumeId,
        owner: UserId,
    ) -> Result<bool, ResumeOwnershipError> {
        let owner_uuid: Uuid = owner.into();

        let count = Entity::find_by_id(Uuid::from(resume_id))
            .filter(Column::UserId.eq(owner_uuid))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn filter_owned(
        &self,
        owner: UserId,
        resume_ids: &[ResumeId],
    ) -> Result<Vec<ResumeId>, ResumeOwnershipError> {
        if resume_ids.is_empty() {
            return Ok(Vec::new());
        }

        let owner_uuid: Uuid = owner.into();
        let ids: Vec<Uuid> = resume_ids.iter().copied().map(Uuid::from).collect();

        let owned: Vec<Uuid> = Entity::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::Id.is_in(ids))
            .filter(Column::UserId.eq(owner_uuid))
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(owned.into_iter().map(ResumeId::from).collect())
    }
}

fn map_db_err(e: DbErr) -> ResumeOwnershipError {
    ResumeOwnershipError::DatabaseError(e.to_string())
}
