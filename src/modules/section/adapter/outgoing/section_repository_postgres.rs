// src/modules/section/adapter/outgoing/section_repository_postgres.rs

use std::collections::HashMap;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, FromQueryResult, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, TransactionTrait,
};
use uuid::Uuid;

use crate::modules::resume::domain::entities::ResumeId;
use crate::modules::section::application::ports::outgoing::{
    SectionRepository, SectionRepositoryError,
};
use crate::modules::section::domain::{
    OrderingStrategy, Section, SectionItem, SectionPayload, SortDirection,
};
use crate::shared::pagination::{PageRequest, PageResult};

const ID_COLUMN: &str = "id";
const RESUME_ID_COLUMN: &str = "resume_id";
const CREATED_AT_COLUMN: &str = "created_at";
const UPDATED_AT_COLUMN: &str = "updated_at";

// ============================================================================
// Binding
// ============================================================================

/// Storage half of a section binding: the sea-orm entity backing the
/// section and how payloads map onto its active model.
///
/// The entity must expose `id`, `resume_id`, `created_at` and `updated_at`
/// columns, plus `display_order` unless the section is date ordered.
pub trait PostgresSection: Section {
    type Entity: EntityTrait<Model = <Self as Section>::Item>;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;

    /// Domain fields only; keys, position and timestamps are set by the
    /// repository.
    fn new_active_model(data: &Self::Create) -> Self::ActiveModel;

    fn apply_patch(model: &mut Self::ActiveModel, data: &Self::Patch);
}

type ColumnOf<S> = <<S as PostgresSection>::Entity as EntityTrait>::Column;

#[derive(Debug, FromQueryResult)]
struct MaxOrderRow {
    max_order: Option<i32>,
}

// ============================================================================
// Repository Implementation
// ============================================================================

pub struct SectionRepositoryPostgres<S> {
    db: Arc<DatabaseConnection>,
    ordering: OrderingStrategy,
    _section: PhantomData<fn() -> S>,
}

impl<S> Clone for SectionRepositoryPostgres<S> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            ordering: self.ordering,
            _section: PhantomData,
        }
    }
}

impl<S> SectionRepositoryPostgres<S>
where
    S: PostgresSection,
    <S as Section>::Item: FromQueryResult,
{
    /// Uses the ordering registered for the section kind.
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            ordering: S::descriptor().ordering,
            _section: PhantomData,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_ordering(db: Arc<DatabaseConnection>, ordering: OrderingStrategy) -> Self {
        Self {
            db,
            ordering,
            _section: PhantomData,
        }
    }

    fn column(name: &str) -> Result<ColumnOf<S>, SectionRepositoryError> {
        <ColumnOf<S> as FromStr>::from_str(name)
            .map_err(|_| SectionRepositoryError::UnknownColumn(name.to_string()))
    }

    fn scoped(resume_id: ResumeId) -> Result<Select<S::Entity>, SectionRepositoryError> {
        let resume_uuid: Uuid = resume_id.into();
        Ok(S::Entity::find().filter(Self::column(RESUME_ID_COLUMN)?.eq(resume_uuid)))
    }

    fn sorted(&self, mut query: Select<S::Entity>) -> Result<Select<S::Entity>, SectionRepositoryError> {
        for key in self.ordering.resolve_sort() {
            let column = Self::column(key.column)?;
            query = match key.direction {
                SortDirection::Asc => query.order_by_asc(column),
                SortDirection::Desc => query.order_by_desc(column),
            };
        }
        Ok(query)
    }

    async fn fetch_one<C>(
        conn: &C,
        id: Uuid,
        resume_id: ResumeId,
    ) -> Result<Option<S::Item>, SectionRepositoryError>
    where
        C: ConnectionTrait,
    {
        Self::scoped(resume_id)?
            .filter(Self::column(ID_COLUMN)?.eq(id))
            .one(conn)
            .await
            .map_err(map_db_err)
    }

    /// Highest stored position in the resume, narrowed to `group` for
    /// multi-field sections.
    async fn current_max_order<C>(
        &self,
        conn: &C,
        resume_id: ResumeId,
        group: Option<&str>,
    ) -> Result<Option<i32>, SectionRepositoryError>
    where
        C: ConnectionTrait,
    {
        let Some(order_column) = self.ordering.order_column() else {
            return Ok(None);
        };
        let resume_uuid: Uuid = resume_id.into();

        let mut query = S::Entity::find()
            .select_only()
            .column_as(Expr::col(Self::column(order_column)?).max(), "max_order")
            .filter(Self::column(RESUME_ID_COLUMN)?.eq(resume_uuid));

        if let (Some(group_column), Some(group)) = (self.ordering.group_column(), group) {
            query = query.filter(Self::column(group_column)?.eq(group.to_owned()));
        }

        let row = query
            .into_model::<MaxOrderRow>()
            .one(conn)
            .await
            .map_err(map_db_err)?;

        Ok(row.and_then(|r| r.max_order))
    }

    /// Position for a new item: the explicit one, or max + 1 in scope.
    async fn resolve_next_order<C>(
        &self,
        conn: &C,
        resume_id: ResumeId,
        data: &S::Create,
    ) -> Result<Option<i32>, SectionRepositoryError>
    where
        C: ConnectionTrait,
    {
        if self.ordering.order_column().is_none() {
            return Ok(None);
        }
        if let Some(explicit) = data.explicit_order() {
            return Ok(Some(explicit));
        }

        let max = self
            .current_max_order(conn, resume_id, data.group_key())
            .await?;
        Ok(self.ordering.resolve_placement(None, max))
    }
}

#[async_trait]
impl<S> SectionRepository<S> for SectionRepositoryPostgres<S>
where
    S: PostgresSection,
    <S as Section>::Item: IntoActiveModel<S::ActiveModel> + FromQueryResult,
{
    async fn find_all_paginated(
        &self,
        resume_id: ResumeId,
        page: PageRequest,
        group: Option<String>,
    ) -> Result<PageResult<S::Item>, SectionRepositoryError> {
        let mut query = Self::scoped(resume_id)?;

        if let (Some(group_column), Some(group)) = (self.ordering.group_column(), group) {
            query = query.filter(Self::column(group_column)?.eq(group));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let items = self
            .sorted(query)?
            .offset(page.offset())
            .limit(u64::from(page.limit))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(items, total, page))
    }

    async fn find_one(
        &self,
        id: Uuid,
        resume_id: ResumeId,
    ) -> Result<Option<S::Item>, SectionRepositoryError> {
        Self::fetch_one(&*self.db, id, resume_id).await
    }

    async fn create(
        &self,
        resume_id: ResumeId,
        data: S::Create,
    ) -> Result<S::Item, SectionRepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut model = S::new_active_model(&data);

        model.set(Self::column(ID_COLUMN)?, Uuid::new_v4().into());
        model.set(
            Self::column(RESUME_ID_COLUMN)?,
            Uuid::from(resume_id).into(),
        );

        if let Some(order) = self.resolve_next_order(&*self.db, resume_id, &data).await? {
            if let Some(order_column) = self.ordering.order_column() {
                model.set(Self::column(order_column)?, order.into());
            }
        }

        model.set(Self::column(CREATED_AT_COLUMN)?, now.into());
        model.set(Self::column(UPDATED_AT_COLUMN)?, now.into());

        model.insert(&*self.db).await.map_err(map_db_err)
    }

    async fn update(
        &self,
        id: Uuid,
        resume_id: ResumeId,
        data: S::Patch,
    ) -> Result<Option<S::Item>, SectionRepositoryError> {
        let mut model = <S::ActiveModel as ActiveModelTrait>::default();
        S::apply_patch(&mut model, &data);

        // Moving to another group without an explicit position appends
        // the item to the end of the target group.
        if let (Some(order_column), Some(target_group), None) = (
            self.ordering.group_column().and(self.ordering.order_column()),
            data.group_key(),
            data.explicit_order(),
        ) {
            let Some(current) = Self::fetch_one(&*self.db, id, resume_id).await? else {
                return Ok(None);
            };

            if current.group_key() != Some(target_group) {
                let max = self
                    .current_max_order(&*self.db, resume_id, Some(target_group))
                    .await?;
                model.set(
                    Self::column(order_column)?,
                    OrderingStrategy::next_order(max).into(),
                );
            }
        }

        if !model.is_changed() {
            return Self::fetch_one(&*self.db, id, resume_id).await;
        }

        model.set(
            Self::column(UPDATED_AT_COLUMN)?,
            Utc::now().fixed_offset().into(),
        );

        let resume_uuid: Uuid = resume_id.into();
        let result = S::Entity::update_many()
            .set(model)
            .filter(Self::column(ID_COLUMN)?.eq(id))
            .filter(Self::column(RESUME_ID_COLUMN)?.eq(resume_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Self::fetch_one(&*self.db, id, resume_id).await
    }

    async fn delete(&self, id: Uuid, resume_id: ResumeId) -> Result<bool, SectionRepositoryError> {
        let resume_uuid: Uuid = resume_id.into();

        let result = S::Entity::delete_many()
            .filter(Self::column(ID_COLUMN)?.eq(id))
            .filter(Self::column(RESUME_ID_COLUMN)?.eq(resume_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn reorder(
        &self,
        resume_id: ResumeId,
        ids: &[Uuid],
    ) -> Result<(), SectionRepositoryError> {
        let Some(order_column) = self.ordering.order_column() else {
            return Err(SectionRepositoryError::ReorderUnsupported);
        };
        let order_column = Self::column(order_column)?;
        let id_column = Self::column(ID_COLUMN)?;
        let resume_column = Self::column(RESUME_ID_COLUMN)?;
        let resume_uuid: Uuid = resume_id.into();

        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Multi-field positions are dense per group, so the group of every
        // listed item is read inside the transaction first.
        let mut groups = HashMap::new();
        if self.ordering.group_column().is_some() {
            let members = Self::scoped(resume_id)?
                .filter(id_column.is_in(ids.to_vec()))
                .all(&txn)
                .await;

            match members {
                Ok(members) => {
                    groups = members
                        .iter()
                        .filter_map(|m| m.group_key().map(|g| (m.id(), g.to_string())))
                        .collect();
                }
                Err(e) => {
                    let _ = txn.rollback().await;
                    return Err(map_db_err(e));
                }
            }
        }

        for (id, position) in self.ordering.assign_positions(ids, &groups) {
            let res = S::Entity::update_many()
                .col_expr(order_column, Expr::value(position))
                .filter(id_column.eq(id))
                .filter(resume_column.eq(resume_uuid))
                .exec(&txn)
                .await;

            if let Err(e) = res {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }

    async fn find_all_for_resumes(
        &self,
        resume_ids: &[ResumeId],
    ) -> Result<Vec<S::Item>, SectionRepositoryError> {
        if resume_ids.is_empty() {
            return Ok(Vec::new());
        }

        let resume_column = Self::column(RESUME_ID_COLUMN)?;
        let uuids: Vec<Uuid> = resume_ids.iter().copied().map(Uuid::from).collect();

        let query = S::Entity::find()
            .filter(resume_column.is_in(uuids))
            .order_by_asc(resume_column);

        self.sorted(query)?
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> SectionRepositoryError {
    SectionRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::sections::certification::CertificationSection;
    use crate::modules::sections::language::{
        self, CreateLanguageData, LanguageSection, PatchLanguageData,
    };
    use crate::shared::patch_field::PatchField;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    fn language_model(resume_id: Uuid, name: &str, display_order: i32) -> language::Model {
        let now = Utc::now().fixed_offset();

        language::Model {
            id: Uuid::new_v4(),
            resume_id,
            name: name.to_string(),
            proficiency: Some("fluent".to_string()),
            display_order,
            created_at: now,
            updated_at: now,
        }
    }

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(n)))])
    }

    fn languages(db: DatabaseConnection) -> SectionRepositoryPostgres<LanguageSection> {
        SectionRepositoryPostgres::new(Arc::new(db))
    }

    // ========================================================================
    // find_all_paginated Tests
    // ========================================================================

    #[tokio::test]
    async fn test_find_all_paginated_builds_envelope() {
        let resume_id = Uuid::new_v4();
        let rows = vec![
            language_model(resume_id, "English", 0),
            language_model(resume_id, "German", 1),
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(3)]]) // 1st query: count
            .append_query_results(vec![rows.clone()]) // 2nd query: page
            .into_connection();

        let result = languages(db)
            .find_all_paginated(ResumeId::from(resume_id), PageRequest::new(1, 2), None)
            .await
            .unwrap();

        assert_eq!(result.data, rows);
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 2);
        assert!(result.has_next_page);
        assert!(!result.has_prev_page);
    }

    #[tokio::test]
    async fn test_find_all_paginated_rejects_unknown_group_column() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = SectionRepositoryPostgres::<LanguageSection>::with_ordering(
            Arc::new(db),
            OrderingStrategy::MultiField {
                group_column: "family",
            },
        );

        let result = repo
            .find_all_paginated(
                ResumeId::from(Uuid::new_v4()),
                PageRequest::new(1, 10),
                Some("germanic".to_string()),
            )
            .await;

        assert!(matches!(
            result,
            Err(SectionRepositoryError::UnknownColumn(ref c)) if c == "family"
        ));
    }

    // ========================================================================
    // find_one / delete Tests
    // ========================================================================

    #[tokio::test]
    async fn test_find_one_returns_none_when_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<language::Model>::new()])
            .into_connection();

        let result = languages(db)
            .find_one(Uuid::new_v4(), ResumeId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_find_one_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = languages(db)
            .find_one(Uuid::new_v4(), ResumeId::from(Uuid::new_v4()))
            .await;

        match result {
            Err(SectionRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection reset"))
            }
            other => panic!("expected DatabaseError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let deleted = languages(db)
            .delete(Uuid::new_v4(), ResumeId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_delete_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let deleted = languages(db)
            .delete(Uuid::new_v4(), ResumeId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(deleted);
    }

    // ========================================================================
    // create / update Tests
    // ========================================================================

    #[tokio::test]
    async fn test_create_appends_after_current_max() {
        let resume_id = Uuid::new_v4();
        let stored = language_model(resume_id, "Japanese", 2);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "max_order".to_string(),
                Value::Int(Some(1)),
            )])]]) // 1st query: max(display_order)
            .append_query_results(vec![vec![stored.clone()]]) // 2nd query: insert returning
            .into_connection();
        let db = Arc::new(db);

        let repo = SectionRepositoryPostgres::<LanguageSection>::new(Arc::clone(&db));
        let created = repo
            .create(
                ResumeId::from(resume_id),
                CreateLanguageData {
                    name: "Japanese".to_string(),
                    proficiency: Some("fluent".to_string()),
                    display_order: None,
                },
            )
            .await
            .unwrap();
        drop(repo);

        assert_eq!(created, stored);

        let log = Arc::try_unwrap(db)
            .ok()
            .expect("repository dropped")
            .into_transaction_log();
        assert_eq!(log.len(), 2);
        assert!(format!("{:?}", log[1]).contains("Int(Some(2))"));
    }

    #[tokio::test]
    async fn test_create_with_explicit_order_skips_max_lookup() {
        let resume_id = Uuid::new_v4();
        let stored = language_model(resume_id, "Spanish", 7);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .into_connection();

        let created = languages(db)
            .create(
                ResumeId::from(resume_id),
                CreateLanguageData {
                    name: "Spanish".to_string(),
                    proficiency: None,
                    display_order: Some(7),
                },
            )
            .await
            .unwrap();

        assert_eq!(created.display_order, 7);
    }

    #[tokio::test]
    async fn test_empty_patch_reads_current_item() {
        let resume_id = Uuid::new_v4();
        let current = language_model(resume_id, "French", 0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![current.clone()]])
            .into_connection();

        let result = languages(db)
            .update(current.id, ResumeId::from(resume_id), PatchLanguageData::default())
            .await
            .unwrap();

        assert_eq!(result, Some(current));
    }

    #[tokio::test]
    async fn test_update_returns_none_when_no_row_matches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let patch = PatchLanguageData {
            name: PatchField::Value("Italian".to_string()),
            ..Default::default()
        };

        let result = languages(db)
            .update(Uuid::new_v4(), ResumeId::from(Uuid::new_v4()), patch)
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_refetches_changed_item() {
        let resume_id = Uuid::new_v4();
        let mut updated = language_model(resume_id, "Italian", 0);
        updated.proficiency = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![updated.clone()]])
            .into_connection();

        let patch = PatchLanguageData {
            name: PatchField::Value("Italian".to_string()),
            proficiency: PatchField::Null,
            ..Default::default()
        };

        let result = languages(db)
            .update(updated.id, ResumeId::from(resume_id), patch)
            .await
            .unwrap();

        assert_eq!(result, Some(updated));
    }

    // ========================================================================
    // reorder / batch Tests
    // ========================================================================

    #[tokio::test]
    async fn test_reorder_unsupported_for_date_ordered_section() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = SectionRepositoryPostgres::<CertificationSection>::new(Arc::new(db));

        let result = repo
            .reorder(ResumeId::from(Uuid::new_v4()), &[Uuid::new_v4()])
            .await;

        assert!(matches!(result, Err(SectionRepositoryError::ReorderUnsupported)));
    }

    #[tokio::test]
    async fn test_reorder_writes_one_position_per_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let result = languages(db)
            .reorder(
                ResumeId::from(Uuid::new_v4()),
                &[Uuid::new_v4(), Uuid::new_v4()],
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_reorder_surfaces_write_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("deadlock detected".to_string())])
            .into_connection();

        let result = languages(db)
            .reorder(ResumeId::from(Uuid::new_v4()), &[Uuid::new_v4()])
            .await;

        assert!(matches!(result, Err(SectionRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_find_all_for_resumes_skips_query_for_empty_input() {
        // No results scripted: any query would fail.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let items = languages(db).find_all_for_resumes(&[]).await.unwrap();

        assert!(items.is_empty());
    }
}
