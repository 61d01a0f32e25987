// In-memory SQLite store with every section table, for scenario tests.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    Schema, Set,
};
use uuid::Uuid;

use crate::bootstrap::build_section_services;
use crate::modules::resume::adapter::outgoing::sea_orm_entity::resumes;
use crate::modules::resume::domain::entities::{ResumeId, UserId};
use crate::modules::sections::{
    achievement, award, bug_bounty, certification, education, experience, hackathon, interest,
    language, open_source, project, publication, recommendation, skill, talk, SectionServices,
};
use crate::shared::pagination::PaginationConfig;

pub struct TestStore {
    pub db: Arc<DatabaseConnection>,
    pub services: SectionServices,
}

impl TestStore {
    pub async fn new() -> Self {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        // A single connection keeps every query on the same in-memory database.
        opt.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(opt).await.expect("open in-memory sqlite");

        create_table(&db, resumes::Entity).await;
        create_table(&db, experience::Entity).await;
        create_table(&db, education::Entity).await;
        create_table(&db, skill::Entity).await;
        create_table(&db, project::Entity).await;
        create_table(&db, certification::Entity).await;
        create_table(&db, award::Entity).await;
        create_table(&db, publication::Entity).await;
        create_table(&db, talk::Entity).await;
        create_table(&db, hackathon::Entity).await;
        create_table(&db, bug_bounty::Entity).await;
        create_table(&db, open_source::Entity).await;
        create_table(&db, language::Entity).await;
        create_table(&db, interest::Entity).await;
        create_table(&db, recommendation::Entity).await;
        create_table(&db, achievement::Entity).await;

        let db = Arc::new(db);
        let services = build_section_services(Arc::clone(&db), PaginationConfig::default());

        Self { db, services }
    }

    pub async fn resume_owned_by(&self, owner: UserId) -> ResumeId {
        let now = Utc::now().fixed_offset();
        let id = Uuid::new_v4();

        resumes::ActiveModel {
            id: Set(id),
            user_id: Set(owner.into()),
            title: Set("Backend engineer".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .expect("seed resume");

        ResumeId::from(id)
    }
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) {
    let backend = db.get_database_backend();
    let stmt = Schema::new(backend).create_table_from_entity(entity);

    db.execute(backend.build(&stmt))
        .await
        .expect("create table from entity");
}

pub fn new_user() -> UserId {
    UserId::from(Uuid::new_v4())
}
