use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::modules::resume::application::OwnershipGuard;
use crate::modules::resume::domain::entities::{ResumeId, UserId};
use crate::modules::section::application::ports::incoming::use_cases::{
    ListQuery, SectionError, SectionUseCases,
};
use crate::modules::section::application::ports::outgoing::{
    SectionRepository, SectionRepositoryError,
};
use crate::modules::section::application::validation::ValidationHooks;
use crate::modules::section::domain::{Section, SectionItem, SectionPayload};
use crate::shared::pagination::{PageResult, PaginationConfig};
use crate::shared::response::Acknowledgement;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Ownership-checked operations over one section kind.
///
/// The ordering policy comes from the repository; entity rules come from
/// `hooks`. One instance serves every resume.
pub struct SectionService<S, R>
where
    S: Section,
    R: SectionRepository<S>,
{
    guard: OwnershipGuard,
    repository: R,
    hooks: ValidationHooks<S>,
    pagination: PaginationConfig,
}

impl<S, R> SectionService<S, R>
where
    S: Section,
    R: SectionRepository<S>,
{
    pub fn new(guard: OwnershipGuard, repository: R, pagination: PaginationConfig) -> Self {
        Self {
            guard,
            repository,
            hooks: ValidationHooks::none(),
            pagination,
        }
    }

    pub fn with_hooks(mut self, hooks: ValidationHooks<S>) -> Self {
        self.hooks = hooks;
        self
    }

    fn entity() -> &'static str {
        S::descriptor().entity_name
    }

    fn storage_failure(operation: &'static str, err: SectionRepositoryError) -> SectionError {
        if !matches!(err, SectionRepositoryError::ReorderUnsupported) {
            error!(
                section = Self::entity(),
                operation,
                error = %err,
                "section storage operation failed"
            );
        }
        SectionError::from(err)
    }

    fn check_explicit_order(order: Option<i32>) -> Result<(), SectionError> {
        match order {
            Some(order) if order < 0 => Err(SectionError::ValidationFailed(format!(
                "display order must be zero or greater, got {order}"
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<S, R> SectionUseCases<S> for SectionService<S, R>
where
    S: Section,
    R: SectionRepository<S> + Send + Sync,
{
    async fn list_for_resume(
        &self,
        resume_id: ResumeId,
        user_id: UserId,
        query: ListQuery,
    ) -> Result<PageResult<S::Item>, SectionError> {
        self.guard.assert_ownership(resume_id, user_id).await?;

        let page = self.pagination.resolve(query.page, query.limit);

        let group = match (S::descriptor().ordering.group_column(), query.group) {
            (Some(_), group) => group,
            (None, Some(group)) => {
                debug!(section = Self::entity(), group = %group, "group filter ignored");
                None
            }
            (None, None) => None,
        };

        self.repository
            .find_all_paginated(resume_id, page, group)
            .await
            .map_err(|e| Self::storage_failure("list", e))
    }

    async fn get_by_id(
        &self,
        resume_id: ResumeId,
        id: Uuid,
        user_id: UserId,
    ) -> Result<S::Item, SectionError> {
        self.guard.assert_ownership(resume_id, user_id).await?;

        self.repository
            .find_one(id, resume_id)
            .await
            .map_err(|e| Self::storage_failure("get", e))?
            .ok_or(SectionError::NotFound(Self::entity()))
    }

    async fn add_to_resume(
        &self,
        resume_id: ResumeId,
        user_id: UserId,
        data: S::Create,
    ) -> Result<S::Item, SectionError> {
        self.guard.assert_ownership(resume_id, user_id).await?;

        Self::check_explicit_order(data.explicit_order())?;
        self.hooks
            .check_create(&data)
            .map_err(SectionError::ValidationFailed)?;

        let item = self
            .repository
            .create(resume_id, data)
            .await
            .map_err(|e| Self::storage_failure("create", e))?;

        info!(
            section = Self::entity(),
            resume_id = %resume_id,
            item_id = %item.id(),
            display_order = ?item.display_order(),
            "section item created"
        );

        Ok(item)
    }

    async fn update_by_id(
        &self,
        resume_id: ResumeId,
        id: Uuid,
        user_id: UserId,
        data: S::Patch,
    ) -> Result<S::Item, SectionError> {
        self.guard.assert_ownership(resume_id, user_id).await?;

        Self::check_explicit_order(data.explicit_order())?;
        self.hooks
            .check_update(&data)
            .map_err(SectionError::ValidationFailed)?;

        let item = self
            .repository
            .update(id, resume_id, data)
            .await
            .map_err(|e| Self::storage_failure("update", e))?
            .ok_or(SectionError::NotFound(Self::entity()))?;

        info!(
            section = Self::entity(),
            resume_id = %resume_id,
            item_id = %id,
            "section item updated"
        );

        Ok(item)
    }

    async fn delete_by_id(
        &self,
        resume_id: ResumeId,
        id: Uuid,
        user_id: UserId,
    ) -> Result<Acknowledgement, SectionError> {
        self.guard.assert_ownership(resume_id, user_id).await?;

        let deleted = self
            .repository
            .delete(id, resume_id)
            .await
            .map_err(|e| Self::storage_failure("delete", e))?;

        if !deleted {
            return Err(SectionError::NotFound(Self::entity()));
        }

        info!(
            section = Self::entity(),
            resume_id = %resume_id,
            item_id = %id,
            "section item deleted"
        );

        Ok(Acknowledgement::ok(format!(
            "{} deleted successfully",
            Self::entity()
        )))
    }

    async fn reorder_in_resume(
        &self,
        resume_id: ResumeId,
        user_id: UserId,
        ids: Vec<Uuid>,
    ) -> Result<Acknowledgement, SectionError> {
        self.guard.assert_ownership(resume_id, user_id).await?;

        if !S::descriptor().ordering.supports_reorder() {
            return Err(SectionError::ValidationFailed(format!(
                "{} entries are ordered by date and cannot be reordered",
                Self::entity()
            )));
        }

        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(duplicate) = ids.iter().find(|id| !seen.insert(**id)) {
            return Err(SectionError::ValidationFailed(format!(
                "id {duplicate} appears more than once"
            )));
        }

        if !ids.is_empty() {
            self.repository
                .reorder(resume_id, &ids)
                .await
                .map_err(|e| Self::storage_failure("reorder", e))?;
        }

        info!(
            section = Self::entity(),
            resume_id = %resume_id,
            ids = ?ids,
            "section items reordered"
        );

        Ok(Acknowledgement::ok(format!(
            "{} order updated successfully",
            Self::entity()
        )))
    }

    async fn list_for_resumes(
        &self,
        user_id: UserId,
        resume_ids: Vec<ResumeId>,
    ) -> Result<HashMap<ResumeId, Vec<S::Item>>, SectionError> {
        let owned = self.guard.owned_subset(user_id, &resume_ids).await?;
        if owned.is_empty() {
            return Ok(HashMap::new());
        }

        let items = self
            .repository
            .find_all_for_resumes(&owned)
            .await
            .map_err(|e| Self::storage_failure("batch list", e))?;

        let mut grouped: HashMap<ResumeId, Vec<S::Item>> =
            owned.iter().map(|id| (*id, Vec::new())).collect();
        for item in items {
            grouped
                .entry(ResumeId::from(item.resume_id()))
                .or_default()
                .push(item);
        }

        Ok(grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::modules::resume::application::ports::outgoing::{
        ResumeOwnershipError, ResumeOwnershipQuery,
    };
    use crate::modules::section::domain::SectionKind;
    use crate::shared::pagination::PageRequest;
    use crate::shared::patch_field::PatchField;

    //
    // ──────────────────────────────────────────────────────────
    // Test section
    // ──────────────────────────────────────────────────────────
    //

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Note {
        id: Uuid,
        resume_id: Uuid,
        text: String,
        display_order: i32,
    }

    impl SectionItem for Note {
        fn id(&self) -> Uuid {
            self.id
        }

        fn resume_id(&self) -> Uuid {
            self.resume_id
        }

        fn display_order(&self) -> Option<i32> {
            Some(self.display_order)
        }
    }

    #[derive(Debug, Clone)]
    struct NewNote {
        text: String,
        display_order: Option<i32>,
    }

    impl SectionPayload for NewNote {
        fn explicit_order(&self) -> Option<i32> {
            self.display_order
        }
    }

    #[derive(Debug, Clone, Default)]
    struct NotePatch {
        text: PatchField<String>,
        display_order: PatchField<i32>,
    }

    impl SectionPayload for NotePatch {
        fn explicit_order(&self) -> Option<i32> {
            self.display_order.as_value().copied()
        }
    }

    struct NoteSection;

    impl Section for NoteSection {
        const KIND: SectionKind = SectionKind::Interest;
        type Item = Note;
        type Create = NewNote;
        type Patch = NotePatch;
    }

    struct DatedNoteSection;

    impl Section for DatedNoteSection {
        const KIND: SectionKind = SectionKind::Certification;
        type Item = Note;
        type Create = NewNote;
        type Patch = NotePatch;
    }

    //
    // ──────────────────────────────────────────────────────────
    // Fakes
    // ──────────────────────────────────────────────────────────
    //

    struct StaticOwnership {
        owner: UserId,
        owned: Vec<ResumeId>,
    }

    #[async_trait]
    impl ResumeOwnershipQuery for StaticOwnership {
        async fn is_owned_by(
            &self,
            resume_id: ResumeId,
            owner: UserId,
        ) -> Result<bool, ResumeOwnershipError> {
            Ok(owner == self.owner && self.owned.contains(&resume_id))
        }

        async fn filter_owned(
            &self,
            owner: UserId,
            resume_ids: &[ResumeId],
        ) -> Result<Vec<ResumeId>, ResumeOwnershipError> {
            if owner != self.owner {
                return Ok(Vec::new());
            }
            Ok(resume_ids
                .iter()
                .copied()
                .filter(|id| self.owned.contains(id))
                .collect())
        }
    }

    #[derive(Clone, Default)]
    struct FakeNoteRepository {
        calls: Arc<AtomicUsize>,
        stored: Option<Note>,
        deleted: bool,
        failure: Option<SectionRepositoryError>,
        reordered: Arc<Mutex<Vec<Uuid>>>,
        batch: Vec<Note>,
    }

    impl FakeNoteRepository {
        fn hit(&self) -> Result<(), SectionRepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl<S> SectionRepository<S> for FakeNoteRepository
    where
        S: Section<Item = Note, Create = NewNote, Patch = NotePatch>,
    {
        async fn find_all_paginated(
            &self,
            _resume_id: ResumeId,
            page: PageRequest,
            _group: Option<String>,
        ) -> Result<PageResult<Note>, SectionRepositoryError> {
            self.hit()?;
            let data: Vec<Note> = self.stored.clone().into_iter().collect();
            let total = data.len() as u64;
            Ok(PageResult::new(data, total, page))
        }

        async fn find_one(
            &self,
            _id: Uuid,
            _resume_id: ResumeId,
        ) -> Result<Option<Note>, SectionRepositoryError> {
            self.hit()?;
            Ok(self.stored.clone())
        }

        async fn create(
            &self,
            resume_id: ResumeId,
            data: NewNote,
        ) -> Result<Note, SectionRepositoryError> {
            self.hit()?;
            Ok(Note {
                id: Uuid::new_v4(),
                resume_id: resume_id.into(),
                text: data.text,
                display_order: data.display_order.unwrap_or(0),
            })
        }

        async fn update(
            &self,
            _id: Uuid,
            _resume_id: ResumeId,
            data: NotePatch,
        ) -> Result<Option<Note>, SectionRepositoryError> {
            self.hit()?;
            Ok(self.stored.clone().map(|mut note| {
                if let PatchField::Value(text) = data.text {
                    note.text = text;
                }
                note
            }))
        }

        async fn delete(
            &self,
            _id: Uuid,
            _resume_id: ResumeId,
        ) -> Result<bool, SectionRepositoryError> {
            self.hit()?;
            Ok(self.deleted)
        }

        async fn reorder(
            &self,
            _resume_id: ResumeId,
            ids: &[Uuid],
        ) -> Result<(), SectionRepositoryError> {
            self.hit()?;
            *self.reordered.lock().unwrap() = ids.to_vec();
            Ok(())
        }

        async fn find_all_for_resumes(
            &self,
            _resume_ids: &[ResumeId],
        ) -> Result<Vec<Note>, SectionRepositoryError> {
            self.hit()?;
            Ok(self.batch.clone())
        }
    }

    struct Fixture {
        owner: UserId,
        resume_id: ResumeId,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                owner: UserId::from(Uuid::new_v4()),
                resume_id: ResumeId::from(Uuid::new_v4()),
            }
        }

        fn guard(&self) -> OwnershipGuard {
            OwnershipGuard::new(Arc::new(StaticOwnership {
                owner: self.owner,
                owned: vec![self.resume_id],
            }))
        }

        fn service(&self, repo: FakeNoteRepository) -> SectionService<NoteSection, FakeNoteRepository> {
            SectionService::new(self.guard(), repo, PaginationConfig::default())
        }

        fn note(&self) -> Note {
            Note {
                id: Uuid::new_v4(),
                resume_id: self.resume_id.into(),
                text: "Climbing".to_string(),
                display_order: 0,
            }
        }
    }

    fn new_note(order: Option<i32>) -> NewNote {
        NewNote {
            text: "Chess".to_string(),
            display_order: order,
        }
    }

    // =====================================================
    // Ownership
    // =====================================================

    #[tokio::test]
    async fn foreign_user_is_denied_before_any_repository_call() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository::default();
        let calls = Arc::clone(&repo.calls);
        let service = fx.service(repo);
        let stranger = UserId::from(Uuid::new_v4());

        let list = service
            .list_for_resume(fx.resume_id, stranger, ListQuery::default())
            .await;
        let get = service.get_by_id(fx.resume_id, Uuid::new_v4(), stranger).await;
        let create = service.add_to_resume(fx.resume_id, stranger, new_note(None)).await;
        let update = service
            .update_by_id(fx.resume_id, Uuid::new_v4(), stranger, NotePatch::default())
            .await;
        let delete = service.delete_by_id(fx.resume_id, Uuid::new_v4(), stranger).await;
        let reorder = service
            .reorder_in_resume(fx.resume_id, stranger, vec![Uuid::new_v4()])
            .await;

        assert_eq!(list.unwrap_err(), SectionError::AccessDenied);
        assert_eq!(get.unwrap_err(), SectionError::AccessDenied);
        assert_eq!(create.unwrap_err(), SectionError::AccessDenied);
        assert_eq!(update.unwrap_err(), SectionError::AccessDenied);
        assert_eq!(delete.unwrap_err(), SectionError::AccessDenied);
        assert_eq!(reorder.unwrap_err(), SectionError::AccessDenied);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_resume_is_denied() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository::default();
        let calls = Arc::clone(&repo.calls);
        let service = fx.service(repo);

        let result = service
            .list_for_resume(ResumeId::from(Uuid::new_v4()), fx.owner, ListQuery::default())
            .await;

        assert_eq!(result.unwrap_err(), SectionError::AccessDenied);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    // =====================================================
    // Reads
    // =====================================================

    #[tokio::test]
    async fn list_resolves_default_page() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository {
            stored: Some(fx.note()),
            ..Default::default()
        };
        let service = fx.service(repo);

        let page = service
            .list_for_resume(fx.resume_id, fx.owner, ListQuery::default())
            .await
            .unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn get_missing_item_is_not_found() {
        let fx = Fixture::new();
        let service = fx.service(FakeNoteRepository::default());

        let result = service.get_by_id(fx.resume_id, Uuid::new_v4(), fx.owner).await;

        assert_eq!(result.unwrap_err(), SectionError::NotFound("Interest"));
    }

    #[tokio::test]
    async fn storage_failure_is_a_repository_error() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository {
            failure: Some(SectionRepositoryError::DatabaseError("db down".to_string())),
            ..Default::default()
        };
        let service = fx.service(repo);

        let result = service.get_by_id(fx.resume_id, Uuid::new_v4(), fx.owner).await;

        assert_eq!(
            result.unwrap_err(),
            SectionError::RepositoryError("db down".to_string())
        );
    }

    // =====================================================
    // Writes
    // =====================================================

    #[tokio::test]
    async fn create_returns_stored_item() {
        let fx = Fixture::new();
        let service = fx.service(FakeNoteRepository::default());

        let note = service
            .add_to_resume(fx.resume_id, fx.owner, new_note(Some(2)))
            .await
            .unwrap();

        assert_eq!(note.text, "Chess");
        assert_eq!(note.display_order, 2);
        assert_eq!(ResumeId::from(note.resume_id), fx.resume_id);
    }

    #[tokio::test]
    async fn negative_explicit_order_is_rejected_without_storage() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository::default();
        let calls = Arc::clone(&repo.calls);
        let service = fx.service(repo);

        let create = service
            .add_to_resume(fx.resume_id, fx.owner, new_note(Some(-1)))
            .await;
        let update = service
            .update_by_id(
                fx.resume_id,
                Uuid::new_v4(),
                fx.owner,
                NotePatch {
                    display_order: PatchField::Value(-3),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(create, Err(SectionError::ValidationFailed(_))));
        assert!(matches!(update, Err(SectionError::ValidationFailed(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failing_hook_stops_the_write() {
        fn reject_blank(data: &NewNote) -> Result<(), String> {
            if data.text.trim().is_empty() {
                return Err("text is required".to_string());
            }
            Ok(())
        }

        fn accept(_: &NotePatch) -> Result<(), String> {
            Ok(())
        }

        let fx = Fixture::new();
        let repo = FakeNoteRepository::default();
        let calls = Arc::clone(&repo.calls);
        let service = fx
            .service(repo)
            .with_hooks(ValidationHooks::new(reject_blank, accept));

        let result = service
            .add_to_resume(
                fx.resume_id,
                fx.owner,
                NewNote {
                    text: "  ".to_string(),
                    display_order: None,
                },
            )
            .await;

        assert_eq!(
            result.unwrap_err(),
            SectionError::ValidationFailed("text is required".to_string())
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_missing_item_is_not_found() {
        let fx = Fixture::new();
        let service = fx.service(FakeNoteRepository::default());

        let result = service
            .update_by_id(fx.resume_id, Uuid::new_v4(), fx.owner, NotePatch::default())
            .await;

        assert_eq!(result.unwrap_err(), SectionError::NotFound("Interest"));
    }

    #[tokio::test]
    async fn update_applies_patch() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository {
            stored: Some(fx.note()),
            ..Default::default()
        };
        let service = fx.service(repo);

        let note = service
            .update_by_id(
                fx.resume_id,
                Uuid::new_v4(),
                fx.owner,
                NotePatch {
                    text: PatchField::Value("Bouldering".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(note.text, "Bouldering");
    }

    #[tokio::test]
    async fn delete_acknowledges() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository {
            deleted: true,
            ..Default::default()
        };
        let service = fx.service(repo);

        let ack = service
            .delete_by_id(fx.resume_id, Uuid::new_v4(), fx.owner)
            .await
            .unwrap();

        assert_eq!(ack, Acknowledgement::ok("Interest deleted successfully"));
    }

    #[tokio::test]
    async fn delete_of_nothing_is_not_found() {
        let fx = Fixture::new();
        let service = fx.service(FakeNoteRepository::default());

        let result = service.delete_by_id(fx.resume_id, Uuid::new_v4(), fx.owner).await;

        assert_eq!(result.unwrap_err(), SectionError::NotFound("Interest"));
    }

    // =====================================================
    // Reorder
    // =====================================================

    #[tokio::test]
    async fn reorder_passes_ids_through() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository::default();
        let reordered = Arc::clone(&repo.reordered);
        let service = fx.service(repo);
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];

        let ack = service
            .reorder_in_resume(fx.resume_id, fx.owner, ids.clone())
            .await
            .unwrap();

        assert!(ack.success);
        assert_eq!(ack.message, "Interest order updated successfully");
        assert_eq!(*reordered.lock().unwrap(), ids);
    }

    #[tokio::test]
    async fn reorder_with_duplicates_is_rejected() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository::default();
        let calls = Arc::clone(&repo.calls);
        let service = fx.service(repo);
        let id = Uuid::new_v4();

        let result = service
            .reorder_in_resume(fx.resume_id, fx.owner, vec![id, Uuid::new_v4(), id])
            .await;

        assert!(matches!(result, Err(SectionError::ValidationFailed(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_reorder_skips_storage() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository::default();
        let calls = Arc::clone(&repo.calls);
        let service = fx.service(repo);

        let ack = service
            .reorder_in_resume(fx.resume_id, fx.owner, vec![])
            .await
            .unwrap();

        assert!(ack.success);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn date_ordered_section_cannot_be_reordered() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository::default();
        let calls = Arc::clone(&repo.calls);
        let service: SectionService<DatedNoteSection, _> =
            SectionService::new(fx.guard(), repo, PaginationConfig::default());

        let result = service
            .reorder_in_resume(fx.resume_id, fx.owner, vec![Uuid::new_v4()])
            .await;

        assert!(matches!(result, Err(SectionError::ValidationFailed(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    // =====================================================
    // Batch
    // =====================================================

    #[tokio::test]
    async fn batch_read_only_covers_owned_resumes() {
        let fx = Fixture::new();
        let foreign = ResumeId::from(Uuid::new_v4());
        let note = fx.note();
        let repo = FakeNoteRepository {
            batch: vec![note.clone()],
            ..Default::default()
        };
        let service = fx.service(repo);

        let grouped = service
            .list_for_resumes(fx.owner, vec![fx.resume_id, foreign])
            .await
            .unwrap();

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[&fx.resume_id], vec![note]);
        assert!(!grouped.contains_key(&foreign));
    }

    #[tokio::test]
    async fn batch_read_for_stranger_is_empty() {
        let fx = Fixture::new();
        let repo = FakeNoteRepository::default();
        let calls = Arc::clone(&repo.calls);
        let service = fx.service(repo);

        let grouped = service
            .list_for_resumes(UserId::from(Uuid::new_v4()), vec![fx.resume_id])
            .await
            .unwrap();

        assert!(grouped.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
